pub mod cookies;
pub mod envelope;
pub mod error;
pub mod requests;

// Re-export HTTP traits from tether_core for convenience
pub use tether_core::{AuthRequest, AuthResponseBuilder};

pub use cookies::SessionCookies;
pub use envelope::{ApiErrorBody, ApiResponse};
pub use error::AuthApiError;
pub use requests::{
    AccessTokenDetailsRequest, ChangePasswordByEmailRequest, ChangePasswordRequest, LoginRequest, RefreshRequest,
    RefreshTokenDetailsRequest, RegisterRequest, optional_json_body, INVALID_BODY_MESSAGE,
};
