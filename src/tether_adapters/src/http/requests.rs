//! JSON request bodies accepted by the handlers.

use secrecy::Secret;
use serde::{Deserialize, de::DeserializeOwned};

use crate::http::error::AuthApiError;

fn blank() -> Secret<String> {
    Secret::new(String::new())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default = "blank")]
    pub email: Secret<String>,
    #[serde(default = "blank")]
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<Secret<String>>,
    #[serde(default = "blank")]
    pub password: Secret<String>,
}

/// Body of a refresh request. The body itself is optional since the token
/// may arrive as a cookie instead.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

impl RefreshRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, AuthApiError> {
        optional_json_body(body)
    }
}

/// Parses a JSON body that may be absent; an empty body yields `T::default()`.
pub fn optional_json_body<T>(body: &[u8]) -> Result<T, AuthApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        AuthApiError::InvalidInput(INVALID_BODY_MESSAGE.to_owned())
    })
}

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default = "blank")]
    pub old_password: Secret<String>,
    #[serde(default = "blank")]
    pub new_password: Secret<String>,
}

/// Password change for a client without a session, keyed by email.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordByEmailRequest {
    #[serde(default = "blank")]
    pub email: Secret<String>,
    #[serde(default = "blank")]
    pub old_password: Secret<String>,
    #[serde(default = "blank")]
    pub new_password: Secret<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenDetailsRequest {
    pub access_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenDetailsRequest {
    pub refresh_token: Option<String>,
}
