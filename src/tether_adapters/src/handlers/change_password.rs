//! Framework-agnostic password change handler.

use serde_json::json;
use tether_application::ChangePasswordUseCase;
use tether_core::{
    AccountStore, AuthResponseBuilder, AuthenticatedAccount, CredentialStore, PasswordHasher,
};

use crate::http::{ApiResponse, AuthApiError, ChangePasswordByEmailRequest, ChangePasswordRequest};

pub async fn handle_change_password<A, C, H, B>(
    use_case: &ChangePasswordUseCase<A, C, H>,
    account: AuthenticatedAccount,
    request: ChangePasswordRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    C: CredentialStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    use_case
        .execute(&account.account_id, request.old_password, request.new_password)
        .await?;

    Ok(password_changed(builder))
}

/// Same outcome as `handle_change_password`, but the account is named by
/// email and proven by its old password instead of an access token.
pub async fn handle_change_password_by_email<A, C, H, B>(
    use_case: &ChangePasswordUseCase<A, C, H>,
    request: ChangePasswordByEmailRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    C: CredentialStore,
    H: PasswordHasher,
    B: AuthResponseBuilder,
{
    use_case
        .execute_by_email(request.email, request.old_password, request.new_password)
        .await?;

    Ok(password_changed(builder))
}

fn password_changed<B: AuthResponseBuilder>(builder: B) -> B::Response {
    builder
        .status(200)
        .json_body(ApiResponse::new(200, json!({}), "Password change successfully").to_json())
        .build()
}
