use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account_id::AccountId,
    password::Password,
    password_hash::PasswordHash,
    token::{CredentialPair, Token, TokenKind},
};

/// Why a token failed verification. Only for logs and tests: callers outside
/// the process must see a single generic "invalid token" condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("malformed token")]
    Malformed,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("unexpected token kind")]
    WrongKind,
}

#[derive(Debug, Error)]
pub enum TokenCodecError {
    #[error("Invalid token")]
    Rejected(TokenRejection),
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Mints and verifies signed, expiring tokens for both token kinds.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, account_id: &AccountId, kind: TokenKind) -> Result<Token, TokenCodecError>;

    /// Checks signature, expiry and kind together, using the configuration of
    /// `expected` only.
    fn verify(&self, token: &str, expected: TokenKind) -> Result<AccountId, TokenCodecError>;

    fn issue_access_token(&self, account_id: &AccountId) -> Result<Token, TokenCodecError> {
        self.issue(account_id, TokenKind::Access)
    }

    fn issue_refresh_token(&self, account_id: &AccountId) -> Result<Token, TokenCodecError> {
        self.issue(account_id, TokenKind::Refresh)
    }

    fn issue_pair(&self, account_id: &AccountId) -> Result<CredentialPair, TokenCodecError> {
        Ok(CredentialPair {
            access_token: self.issue_access_token(account_id)?,
            refresh_token: self.issue_refresh_token(account_id)?,
        })
    }
}

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// `Ok(false)` on mismatch; errors are reserved for unusable hashes.
    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError>;
}
