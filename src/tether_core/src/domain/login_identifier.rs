use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use crate::domain::account::Account;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginIdentifierError {
    #[error("username or email is required")]
    Missing,
}

/// Username and/or email a client logs in with.
///
/// Values are only normalized, not validated: a malformed identifier simply
/// matches no account, which keeps login failures indistinguishable.
#[derive(Debug, Clone)]
pub struct LoginIdentifier {
    username: Option<String>,
    email: Option<Secret<String>>,
}

impl LoginIdentifier {
    pub fn parse(
        username: Option<String>,
        email: Option<Secret<String>>,
    ) -> Result<Self, LoginIdentifierError> {
        let username = username
            .map(|u| u.trim().to_lowercase())
            .filter(|u| !u.is_empty());
        let email = email
            .map(|e| e.expose_secret().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .map(Secret::new);

        if username.is_none() && email.is_none() {
            return Err(LoginIdentifierError::Missing);
        }

        Ok(Self { username, email })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().map(|e| e.expose_secret().as_str())
    }

    /// True when either supplied identifier belongs to `account`.
    pub fn matches(&self, account: &Account) -> bool {
        self.username() == Some(account.username().as_str())
            || self.email() == Some(account.email().as_str())
    }
}
