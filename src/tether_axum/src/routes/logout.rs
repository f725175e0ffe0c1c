//! Axum-specific logout route.

use axum::{Extension, extract::State, response::Response};
use tether_adapters::{handlers, http::AuthApiError};
use tether_core::{
    AccountStore, AuthenticatedAccount, CredentialStore, PasswordHasher, TokenCodec,
};

use crate::{adapters::response_builder, routes::AuthState};

/// Axum logout route. Expects `require_authentication` in front of it.
#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_logout(&state.sessions, &state.cookies, account, response_builder()).await
}
