use secrecy::{ExposeSecret, Secret};
use tether_core::{
    Account, AccountError, AccountProfile, AccountStore, AccountStoreError, Email, FullName,
    Password, PasswordHasher, PasswordHasherError, Username,
};

use crate::error::{ClassifiedError, ErrorKind};

/// Raw registration input.
#[derive(Debug)]
pub struct RegistrationData {
    pub full_name: String,
    pub username: String,
    pub email: Secret<String>,
    pub password: Secret<String>,
}

impl RegistrationData {
    fn has_blank_field(&self) -> bool {
        [
            self.full_name.as_str(),
            self.username.as_str(),
            self.email.expose_secret().as_str(),
            self.password.expose_secret().as_str(),
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("All fields are required")]
    MissingFields,
    #[error("{0}")]
    InvalidInput(#[from] AccountError),
    #[error("User with email or username already exists")]
    AccountAlreadyExists,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for SignupError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::AccountAlreadyExists => SignupError::AccountAlreadyExists,
            e => SignupError::AccountStoreError(e),
        }
    }
}

impl ClassifiedError for SignupError {
    fn kind(&self) -> ErrorKind {
        match self {
            SignupError::MissingFields | SignupError::InvalidInput(_) => ErrorKind::Validation,
            SignupError::AccountAlreadyExists => ErrorKind::Authentication,
            SignupError::AccountStoreError(_) | SignupError::PasswordHasherError(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Signup use case - registers an account with a salted password hash and an
/// empty refresh slot.
pub struct SignupUseCase<A, H> {
    account_store: A,
    password_hasher: H,
}

impl<A, H> SignupUseCase<A, H>
where
    A: AccountStore,
    H: PasswordHasher,
{
    pub fn new(account_store: A, password_hasher: H) -> Self {
        Self {
            account_store,
            password_hasher,
        }
    }

    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(&self, data: RegistrationData) -> Result<AccountProfile, SignupError> {
        if data.has_blank_field() {
            return Err(SignupError::MissingFields);
        }

        let full_name = FullName::try_from(data.full_name)?;
        let username = Username::try_from(data.username)?;
        let email = Email::try_from(data.email)?;
        let password = Password::try_from(data.password)?;

        let password_hash = self.password_hasher.hash_password(&password).await?;
        let account = Account::new(username, email, full_name, password_hash);
        let profile = account.profile();

        self.account_store.add_account(account).await?;

        tracing::info!(account_id = %profile.id, "account registered");
        Ok(profile)
    }
}
