use secrecy::Secret;
use tether_core::{
    Account, AccountError, AccountId, AccountStore, AccountStoreError, CredentialStore,
    CredentialStoreError, LoginIdentifier, Password, PasswordHasher, PasswordHasherError,
};

use crate::error::{ClassifiedError, ErrorKind};

/// Error types for change password use case
#[derive(Debug, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("{0}")]
    InvalidInput(AccountError),
    #[error("Invalid old password")]
    InvalidOldPassword,
    #[error("Invalid user credentials")]
    InvalidCredentials,
    #[error("UnAuthorized Request")]
    Unauthorized,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Credential store error: {0}")]
    CredentialStoreError(#[from] CredentialStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl ClassifiedError for ChangePasswordError {
    fn kind(&self) -> ErrorKind {
        match self {
            ChangePasswordError::InvalidInput(_) => ErrorKind::Validation,
            ChangePasswordError::InvalidOldPassword
            | ChangePasswordError::InvalidCredentials
            | ChangePasswordError::Unauthorized => ErrorKind::Authentication,
            ChangePasswordError::AccountStoreError(_)
            | ChangePasswordError::CredentialStoreError(_)
            | ChangePasswordError::PasswordHasherError(_) => ErrorKind::Internal,
        }
    }
}

/// Change password use case - replaces the password hash of an authenticated
/// account after re-checking its current password.
///
/// A successful change also clears the refresh slot, so every device has to
/// log in again once its access token expires.
pub struct ChangePasswordUseCase<A, C, H> {
    account_store: A,
    credential_store: C,
    password_hasher: H,
}

impl<A, C, H> ChangePasswordUseCase<A, C, H>
where
    A: AccountStore,
    C: CredentialStore,
    H: PasswordHasher,
{
    pub fn new(account_store: A, credential_store: C, password_hasher: H) -> Self {
        Self {
            account_store,
            credential_store,
            password_hasher,
        }
    }

    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, old_password, new_password)
    )]
    pub async fn execute(
        &self,
        account_id: &AccountId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let old_password =
            Password::presented(old_password).map_err(ChangePasswordError::InvalidInput)?;
        let new_password =
            Password::try_from(new_password).map_err(ChangePasswordError::InvalidInput)?;

        let account = self
            .account_store
            .find_by_id(account_id)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => ChangePasswordError::Unauthorized,
                e => ChangePasswordError::AccountStoreError(e),
            })?;

        if !self.old_password_matches(&account, &old_password).await? {
            return Err(ChangePasswordError::InvalidOldPassword);
        }

        self.replace_password(&account, &new_password).await
    }

    /// Password change for a client that is not logged in, keyed by email.
    ///
    /// An unknown email and a wrong old password fail with the same
    /// `InvalidCredentials`, so the endpoint does not reveal which emails
    /// are registered.
    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute_by_email",
        skip(self, email, old_password, new_password)
    )]
    pub async fn execute_by_email(
        &self,
        email: Secret<String>,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), ChangePasswordError> {
        let identifier = LoginIdentifier::parse(None, Some(email))
            .map_err(|_| ChangePasswordError::InvalidInput(AccountError::MissingField("email")))?;
        let old_password =
            Password::presented(old_password).map_err(ChangePasswordError::InvalidInput)?;
        let new_password =
            Password::try_from(new_password).map_err(ChangePasswordError::InvalidInput)?;

        let account = match self.account_store.find_by_identifier(&identifier).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => {
                return Err(ChangePasswordError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        if !self.old_password_matches(&account, &old_password).await? {
            return Err(ChangePasswordError::InvalidCredentials);
        }

        self.replace_password(&account, &new_password).await
    }

    async fn old_password_matches(
        &self,
        account: &Account,
        old_password: &Password,
    ) -> Result<bool, ChangePasswordError> {
        Ok(self
            .password_hasher
            .verify_password(account.password_hash(), old_password)
            .await?)
    }

    async fn replace_password(
        &self,
        account: &Account,
        new_password: &Password,
    ) -> Result<(), ChangePasswordError> {
        let account_id = account.id();
        let password_hash = self.password_hasher.hash_password(new_password).await?;
        self.account_store
            .set_password_hash(account_id, password_hash)
            .await?;
        self.credential_store.clear_refresh_token(account_id).await?;

        tracing::info!(%account_id, "password changed, sessions revoked");
        Ok(())
    }
}
