//! Framework-agnostic logout handler.

use serde_json::json;
use tether_application::SessionManager;
use tether_core::{
    AccountStore, AuthResponseBuilder, AuthenticatedAccount, CredentialStore, PasswordHasher,
    TokenCodec,
};

use crate::http::{ApiResponse, AuthApiError, SessionCookies};

/// Revoke the refresh token of the authenticated account and clear both
/// cookies.
pub async fn handle_logout<A, C, T, H, B>(
    sessions: &SessionManager<A, C, T, H>,
    cookies: &SessionCookies,
    account: AuthenticatedAccount,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    C: CredentialStore,
    T: TokenCodec,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    sessions.logout(&account.account_id).await?;

    Ok(cookies
        .clear_pair(builder.status(200))
        .json_body(ApiResponse::new(200, json!({}), "User logged Out").to_json())
        .build())
}
