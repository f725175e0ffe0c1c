use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::Account, account_id::AccountId, login_identifier::LoginIdentifier,
    password_hash::PasswordHash, token::Token,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Account repository. Reads after a write to the same account must observe it.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fails with `AccountAlreadyExists` when the username or the email is taken.
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError>;
    async fn find_by_identifier(
        &self,
        identifier: &LoginIdentifier,
    ) -> Result<Account, AccountStoreError>;
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
    async fn set_password_hash(
        &self,
        id: &AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError>;
}

// CredentialStore port trait and errors
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CredentialStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// The single refresh token slot of each account.
///
/// Overwriting or clearing the slot is the only way a refresh token is revoked.
/// Every write must be durable before the call returns.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn set_refresh_token(
        &self,
        id: &AccountId,
        token: &Token,
    ) -> Result<(), CredentialStoreError>;

    async fn clear_refresh_token(&self, id: &AccountId) -> Result<(), CredentialStoreError>;

    async fn get_refresh_token(
        &self,
        id: &AccountId,
    ) -> Result<Option<Token>, CredentialStoreError>;

    /// Atomically stores `replacement` if and only if the slot currently holds
    /// `presented`. Returns `false`, leaving the slot untouched, otherwise.
    async fn replace_refresh_token(
        &self,
        id: &AccountId,
        presented: &Token,
        replacement: &Token,
    ) -> Result<bool, CredentialStoreError>;
}
