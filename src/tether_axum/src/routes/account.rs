//! Axum-specific account lookup routes.

use axum::{Extension, extract::State, response::Response};
use tether_adapters::{
    handlers,
    http::{AccessTokenDetailsRequest, AuthApiError, RefreshTokenDetailsRequest},
};
use tether_core::{
    AccountStore, AuthenticatedAccount, CredentialStore, PasswordHasher, TokenCodec,
};

use crate::{adapters::response_builder, extract::OptionalJsonBody, routes::AuthState};

#[tracing::instrument(name = "Current account", skip_all)]
pub async fn current_account<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_current_account(&state.queries, account, response_builder()).await
}

#[tracing::instrument(name = "Account from access token", skip_all)]
pub async fn account_from_access_token<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    OptionalJsonBody(request): OptionalJsonBody<AccessTokenDetailsRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_account_from_access_token(&state.queries, request, response_builder()).await
}

#[tracing::instrument(name = "Account from refresh token", skip_all)]
pub async fn account_from_refresh_token<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    OptionalJsonBody(request): OptionalJsonBody<RefreshTokenDetailsRequest>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_account_from_refresh_token(&state.queries, request, response_builder()).await
}

#[tracing::instrument(name = "List accounts", skip_all)]
pub async fn list_accounts<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    handlers::handle_list_accounts(&state.queries, response_builder()).await
}
