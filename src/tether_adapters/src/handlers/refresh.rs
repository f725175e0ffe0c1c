//! Framework-agnostic refresh handler.

use serde_json::json;
use tether_application::SessionManager;
use tether_core::{
    AccountStore, AuthRequest, AuthResponseBuilder, CredentialStore, PasswordHasher, Token,
    TokenCodec,
};

use crate::http::{ApiResponse, AuthApiError, RefreshRequest, SessionCookies};

/// Rotate the presented refresh token into a brand-new pair.
///
/// The token is read from the body's `refreshToken` field, falling back to
/// the refresh cookie.
pub fn handle_refresh<'a, A, C, T, H, R, B>(
    sessions: &'a SessionManager<A, C, T, H>,
    cookies: &'a SessionCookies,
    request: &R,
    body: RefreshRequest,
    builder: B,
) -> impl Future<Output = Result<B::Response, AuthApiError>> + 'a
where
    A: AccountStore,
    C: CredentialStore,
    T: TokenCodec,
    H: PasswordHasher,
    R: AuthRequest,
    B: AuthResponseBuilder + 'a,
{
    // Resolved before the future is built so the request is not borrowed
    // across an await point (axum's request body is not `Sync`).
    let presented = body
        .refresh_token
        .filter(|token| !token.trim().is_empty())
        .map(Token::from)
        .or_else(|| cookies.refresh_token_from(request));

    async move {
        let tokens = sessions.refresh(presented).await?;

        let data = json!({
            "accessToken": tokens.access_token.as_str(),
            "refreshToken": tokens.refresh_token.as_str(),
        });

        Ok(cookies
            .set_pair(builder.status(200), &tokens)
            .json_body(ApiResponse::new(200, data, "Access Token Refreshed").to_json())
            .build())
    }
}
