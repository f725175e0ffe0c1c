//! Axum-specific registration route.

use axum::{extract::State, response::Response};
use tether_adapters::{
    handlers,
    http::{AuthApiError, RegisterRequest},
};
use tether_core::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};

use crate::{adapters::response_builder, extract::JsonBody, routes::AuthState};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_register(&state.signup, request, response_builder()).await
}
