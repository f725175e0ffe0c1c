//! Framework-agnostic registration handler.

use tether_application::{RegistrationData, SignupUseCase};
use tether_core::{AccountStore, AuthResponseBuilder, PasswordHasher};

use crate::http::{ApiResponse, AuthApiError, RegisterRequest};

/// Register a new account and answer `201` with its public profile.
pub async fn handle_register<A, H, B>(
    use_case: &SignupUseCase<A, H>,
    request: RegisterRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    let profile = use_case
        .execute(RegistrationData {
            full_name: request.full_name,
            username: request.username,
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(builder
        .status(201)
        .json_body(ApiResponse::new(201, profile, "User registered Successfully").to_json())
        .build())
}
