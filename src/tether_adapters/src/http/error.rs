use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tether_application::{
    AccountQueryError, ChangePasswordError, ClassifiedError, ErrorKind, SessionError, SignupError,
};
use thiserror::Error;

use crate::{auth_validation::AccessTokenError, http::envelope::ApiErrorBody};

/// Transport-level error. Only the public message of the underlying failure
/// is ever rendered; internal details go to the log.
#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Something went wrong while processing the request")]
    UnexpectedError,
}

impl AuthApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthApiError::Conflict(_) => StatusCode::CONFLICT,
            AuthApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AuthApiError::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn classify<E: ClassifiedError>(error: E) -> Self {
        match error.kind() {
            ErrorKind::Validation => AuthApiError::InvalidInput(error.public_message()),
            ErrorKind::Authentication => AuthApiError::Unauthorized(error.public_message()),
            ErrorKind::Internal => {
                tracing::error!(error = %error, "request failed");
                AuthApiError::UnexpectedError
            }
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let body = Json(ApiErrorBody::new(status_code.as_u16(), self.to_string()));

        (status_code, body).into_response()
    }
}

impl From<SessionError> for AuthApiError {
    fn from(error: SessionError) -> Self {
        AuthApiError::classify(error)
    }
}

impl From<SignupError> for AuthApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::AccountAlreadyExists => AuthApiError::Conflict(error.to_string()),
            e => AuthApiError::classify(e),
        }
    }
}

impl From<ChangePasswordError> for AuthApiError {
    fn from(error: ChangePasswordError) -> Self {
        AuthApiError::classify(error)
    }
}

impl From<AccountQueryError> for AuthApiError {
    fn from(error: AccountQueryError) -> Self {
        AuthApiError::classify(error)
    }
}

impl From<AccessTokenError> for AuthApiError {
    fn from(error: AccessTokenError) -> Self {
        match error {
            AccessTokenError::MissingToken | AccessTokenError::InvalidToken => {
                AuthApiError::Unauthorized(error.to_string())
            }
        }
    }
}
