//! Axum-specific refresh route.

use axum::{
    body::Body,
    extract::{Request, State},
    response::Response,
};
use tether_adapters::{
    handlers,
    http::{AuthApiError, RefreshRequest},
};
use tether_core::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};

use crate::{
    adapters::{AxumRequest, response_builder},
    extract::read_body,
    routes::AuthState,
};

/// Axum refresh route.
///
/// The body is optional, so the whole request is taken: the cookies stay
/// readable after the body has been consumed.
#[tracing::instrument(name = "Refresh token", skip_all)]
pub async fn refresh_token<S, T, H>(
    State(state): State<AuthState<S, T, H>>,
    request: Request,
) -> Result<Response, AuthApiError>
where
    S: AccountStore + CredentialStore + 'static,
    T: TokenCodec + 'static,
    H: PasswordHasher + 'static,
{
    let (parts, body) = request.into_parts();
    let body = RefreshRequest::from_body(&read_body(body).await?)?;
    let request = AxumRequest(Request::from_parts(parts, Body::empty()));

    handlers::handle_refresh(
        &state.sessions,
        &state.cookies,
        &request,
        body,
        response_builder(),
    )
    .await
}
