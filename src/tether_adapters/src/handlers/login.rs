//! Framework-agnostic login handler.

use serde_json::json;
use tether_application::{LoginCredentials, SessionManager};
use tether_core::{AccountStore, AuthResponseBuilder, CredentialStore, PasswordHasher, TokenCodec};

use crate::http::{ApiResponse, AuthApiError, LoginRequest, SessionCookies};

/// Log in with username or email and password.
///
/// The new pair is delivered twice: as `HttpOnly` cookies and in the JSON
/// body, next to the account profile.
pub async fn handle_login<A, C, T, H, B>(
    sessions: &SessionManager<A, C, T, H>,
    cookies: &SessionCookies,
    request: LoginRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    C: CredentialStore,
    T: TokenCodec,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    let outcome = sessions
        .login(LoginCredentials {
            username: request.username,
            email: request.email,
            password: request.password,
        })
        .await?;

    let data = json!({
        "user": outcome.account,
        "accessToken": outcome.tokens.access_token.as_str(),
        "refreshToken": outcome.tokens.refresh_token.as_str(),
    });

    Ok(cookies
        .set_pair(builder.status(200), &outcome.tokens)
        .json_body(ApiResponse::new(200, data, "User logged In Successfully").to_json())
        .build())
}
