//! Axum-specific password change route.

use axum::{Extension, extract::State, response::Response};
use tether_adapters::{
    handlers,
    http::{AuthApiError, ChangePasswordByEmailRequest, ChangePasswordRequest},
};
use tether_core::{
    AccountStore, AuthenticatedAccount, CredentialStore, PasswordHasher, TokenCodec,
};

use crate::{adapters::response_builder, extract::JsonBody, routes::AuthState};

/// Axum password change route.
///
/// The account comes from the access token checked by
/// `require_authentication`; the old password is verified again here.
#[tracing::instrument(name = "Change Password", skip_all)]
pub async fn change_password<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    Extension(account): Extension<AuthenticatedAccount>,
    JsonBody(request): JsonBody<ChangePasswordRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_change_password(&state.change_password, account, request, response_builder())
        .await
}

/// Axum password change route for clients without a session.
#[tracing::instrument(name = "Change Password By Email", skip_all)]
pub async fn change_password_by_email<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    JsonBody(request): JsonBody<ChangePasswordByEmailRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_change_password_by_email(&state.change_password, request, response_builder())
        .await
}
