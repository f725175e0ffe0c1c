use secrecy::{ExposeSecret, Secret};

use crate::domain::account::AccountError;

/// Salted one-way hash of a password in PHC string format (`$argon2id$...`).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for PasswordHash {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if !value.expose_secret().starts_with('$') {
            return Err(AccountError::InvalidPasswordHash);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
