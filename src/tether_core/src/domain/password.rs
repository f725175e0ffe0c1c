use secrecy::{ExposeSecret, Secret};

use crate::domain::account::AccountError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password as presented by a client.
///
/// Never logged and never persisted; only its hash leaves the request.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Accepts any non-blank value. Used for passwords that are checked against a
    /// stored hash, where the current length policy must not lock anybody out.
    pub fn presented(value: Secret<String>) -> Result<Self, AccountError> {
        if value.expose_secret().trim().is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Parses a password that is about to be hashed and stored.
impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let password = Self::presented(value)?;
        if password.0.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountError::PasswordTooShort);
        }
        Ok(password)
    }
}
