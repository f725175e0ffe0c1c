//! Framework-agnostic account lookup handlers.

use serde_json::json;
use tether_application::AccountQueries;
use tether_core::{AccountStore, AuthResponseBuilder, AuthenticatedAccount, Token, TokenCodec};

use crate::http::{
    AccessTokenDetailsRequest, ApiResponse, AuthApiError, RefreshTokenDetailsRequest,
};

const DETAILS_MESSAGE: &str = "Get information Successfully";

pub async fn handle_current_account<A, T, B>(
    queries: &AccountQueries<A, T>,
    account: AuthenticatedAccount,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    T: TokenCodec,
    B: AuthResponseBuilder,
{
    let profile = queries.current_account(&account.account_id).await?;

    Ok(builder
        .status(200)
        .json_body(ApiResponse::new(200, profile, "This is current user").to_json())
        .build())
}

/// Resolve the account behind an access token sent in the body.
pub async fn handle_account_from_access_token<A, T, B>(
    queries: &AccountQueries<A, T>,
    request: AccessTokenDetailsRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    T: TokenCodec,
    B: AuthResponseBuilder,
{
    let profile = queries
        .account_from_access_token(request.access_token.map(Token::from))
        .await?;

    Ok(builder
        .status(200)
        .json_body(ApiResponse::new(200, json!({ "user": profile }), DETAILS_MESSAGE).to_json())
        .build())
}

/// Resolve the account behind a refresh token sent in the body. The stored
/// refresh slot is neither consulted nor changed.
pub async fn handle_account_from_refresh_token<A, T, B>(
    queries: &AccountQueries<A, T>,
    request: RefreshTokenDetailsRequest,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    T: TokenCodec,
    B: AuthResponseBuilder,
{
    let profile = queries
        .account_from_refresh_token(request.refresh_token.map(Token::from))
        .await?;

    Ok(builder
        .status(200)
        .json_body(ApiResponse::new(200, json!({ "user": profile }), DETAILS_MESSAGE).to_json())
        .build())
}

pub async fn handle_list_accounts<A, T, B>(
    queries: &AccountQueries<A, T>,
    builder: B,
) -> Result<B::Response, AuthApiError>
where
    A: AccountStore,
    T: TokenCodec,
    B: AuthResponseBuilder,
{
    let accounts = queries.list_accounts().await?;

    Ok(builder
        .status(200)
        .json_body(ApiResponse::new(200, json!({ "users": accounts }), "All users list").to_json())
        .build())
}
