//! Axum-specific login route.

use axum::{extract::State, response::Response};
use tether_adapters::{
    handlers,
    http::{AuthApiError, LoginRequest},
};
use tether_core::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};

use crate::{adapters::response_builder, extract::JsonBody, routes::AuthState};

/// Axum login route.
///
/// Extraction only; the credential checks live in the framework-agnostic
/// handler.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_login(&state.sessions, &state.cookies, request, response_builder()).await
}
