//! Request authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tether_adapters::http::AuthApiError;
use tether_core::RequestAuthenticator;

use crate::adapters::AxumRequest;

/// Rejects the request unless the authenticator accepts it; on success the
/// [`AuthenticatedAccount`](tether_core::AuthenticatedAccount) is stored in the
/// request extensions for the route to pick up.
///
/// ```ignore
/// Router::new()
///     .route("/logout", post(routes::logout::<S, T, H>))
///     .route_layer(from_fn_with_state(authenticator, require_authentication::<A>))
/// ```
pub async fn require_authentication<A>(
    State(authenticator): State<A>,
    request: Request,
    next: Next,
) -> Result<Response, AuthApiError>
where
    A: RequestAuthenticator,
    AuthApiError: From<A::Error>,
{
    let request = AxumRequest(request);
    let account = authenticator.authenticate(&request)?;

    let mut request = request.0;
    request.extensions_mut().insert(account);
    Ok(next.run(request).await)
}
