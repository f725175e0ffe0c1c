//! Credential lifecycle: login, refresh rotation and logout.
//!
//! ```text
//! Unauthenticated ──login──▶ Authenticated(pair) ──refresh──▶ Rotated(pair')
//!        ▲                          │                             │
//!        └──────── Revoked ◀────────┴──── logout / new login ─────┘
//! ```
//!
//! `Revoked` has no record of its own: it is the state of a refresh token that
//! no longer matches the account's single refresh slot.

use secrecy::Secret;
use tether_core::{
    AccountError, AccountId, AccountProfile, AccountStore, AccountStoreError, CredentialPair,
    CredentialStore, CredentialStoreError, LoginIdentifier, Password, PasswordHasher,
    PasswordHasherError, Token, TokenCodec, TokenCodecError, TokenKind,
};

use crate::error::{ClassifiedError, ErrorKind};

/// Raw login input, as received from a client.
#[derive(Debug)]
pub struct LoginCredentials {
    pub username: Option<String>,
    pub email: Option<Secret<String>>,
    pub password: Secret<String>,
}

#[derive(Debug)]
pub struct LoginOutcome {
    pub account: AccountProfile,
    pub tokens: CredentialPair,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("username or email is required")]
    MissingIdentifier,
    #[error("{0}")]
    InvalidInput(AccountError),
    #[error("Invalid user credentials")]
    InvalidCredentials,
    #[error("UnAuthorized Request")]
    Unauthorized,
    #[error("Invalid Refresh Token")]
    InvalidRefreshToken,
    #[error("Refresh Token is expired or used")]
    TokenReused,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("Token codec error: {0}")]
    TokenCodecError(#[from] TokenCodecError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl ClassifiedError for SessionError {
    fn kind(&self) -> ErrorKind {
        match self {
            SessionError::MissingIdentifier | SessionError::InvalidInput(_) => {
                ErrorKind::Validation
            }
            SessionError::InvalidCredentials
            | SessionError::Unauthorized
            | SessionError::InvalidRefreshToken
            | SessionError::TokenReused => ErrorKind::Authentication,
            SessionError::AccountStoreError(_)
            | SessionError::CredentialStoreError(_)
            | SessionError::TokenCodecError(_)
            | SessionError::PasswordHasherError(_) => ErrorKind::Internal,
        }
    }
}

/// Owns the credential state machine of every account.
///
/// Generic over its ports so the same logic runs against the in-memory and
/// the PostgreSQL stores.
pub struct SessionManager<A, C, T, H> {
    account_store: A,
    credential_store: C,
    token_codec: T,
    password_hasher: H,
}

impl<A, C, T, H> SessionManager<A, C, T, H>
where
    A: AccountStore,
    C: CredentialStore,
    T: TokenCodec,
    H: PasswordHasher,
{
    pub fn new(account_store: A, credential_store: C, token_codec: T, password_hasher: H) -> Self {
        Self {
            account_store,
            credential_store,
            token_codec,
            password_hasher,
        }
    }

    /// Verifies the password and starts a new session.
    ///
    /// The new refresh token replaces whatever the account held before, so a
    /// login on a second device invalidates the first device's refresh token.
    /// Unknown accounts and wrong passwords fail identically.
    #[tracing::instrument(name = "SessionManager::login", skip_all)]
    pub async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, SessionError> {
        let identifier = LoginIdentifier::parse(credentials.username, credentials.email)
            .map_err(|_| SessionError::MissingIdentifier)?;
        let password =
            Password::presented(credentials.password).map_err(SessionError::InvalidInput)?;

        let account = match self.account_store.find_by_identifier(&identifier).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => {
                tracing::debug!("login for unknown account");
                return Err(SessionError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        if !self
            .password_hasher
            .verify_password(account.password_hash(), &password)
            .await?
        {
            tracing::debug!(account_id = %account.id(), "password mismatch");
            return Err(SessionError::InvalidCredentials);
        }

        // Nothing is persisted unless both tokens were minted.
        let tokens = self.token_codec.issue_pair(account.id())?;
        self.credential_store
            .set_refresh_token(account.id(), &tokens.refresh_token)
            .await?;

        tracing::info!(account_id = %account.id(), "session started");

        Ok(LoginOutcome {
            account: account.profile(),
            tokens,
        })
    }

    /// Exchanges a refresh token for a brand-new pair. Each refresh token can be
    /// exchanged once; the slot swap is a single atomic store operation so
    /// concurrent exchanges of the same token yield exactly one winner.
    #[tracing::instrument(name = "SessionManager::refresh", skip_all)]
    pub async fn refresh(&self, presented: Option<Token>) -> Result<CredentialPair, SessionError> {
        let presented = presented
            .filter(|token| !token.as_str().trim().is_empty())
            .ok_or(SessionError::Unauthorized)?;

        let account_id = self
            .token_codec
            .verify(presented.as_str(), TokenKind::Refresh)
            .map_err(|e| match e {
                TokenCodecError::Rejected(reason) => {
                    tracing::debug!(%reason, "refresh token rejected");
                    SessionError::InvalidRefreshToken
                }
                e => SessionError::TokenCodecError(e),
            })?;

        let account = self
            .account_store
            .find_by_id(&account_id)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => SessionError::InvalidRefreshToken,
                e => SessionError::AccountStoreError(e),
            })?;

        let tokens = self.token_codec.issue_pair(account.id())?;

        let rotated = self
            .credential_store
            .replace_refresh_token(account.id(), &presented, &tokens.refresh_token)
            .await
            .map_err(|e| match e {
                CredentialStoreError::AccountNotFound => SessionError::InvalidRefreshToken,
                e => SessionError::CredentialStoreError(e),
            })?;

        if !rotated {
            tracing::warn!(account_id = %account.id(), "superseded refresh token presented");
            return Err(SessionError::TokenReused);
        }

        tracing::info!(account_id = %account.id(), "session rotated");
        Ok(tokens)
    }

    /// Clears the refresh slot of an already authenticated account.
    #[tracing::instrument(name = "SessionManager::logout", skip(self))]
    pub async fn logout(&self, account_id: &AccountId) -> Result<(), SessionError> {
        self.credential_store
            .clear_refresh_token(account_id)
            .await
            .map_err(|e| match e {
                CredentialStoreError::AccountNotFound => SessionError::Unauthorized,
                e => SessionError::CredentialStoreError(e),
            })?;

        tracing::info!(%account_id, "session revoked");
        Ok(())
    }
}
