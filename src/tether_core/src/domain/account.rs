use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{
    account_id::AccountId, email::Email, password_hash::PasswordHash, token::Token,
    username::Username,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Username must be 3 to 32 letters, digits, '.', '_' or '-'")]
    InvalidUsername,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Invalid password hash")]
    InvalidPasswordHash,
}

/// Display name of an account holder. Only presence is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FullName {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AccountError::MissingField("fullName"));
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// Identity record of a user.
///
/// The account exclusively owns its `refresh_token` slot: at most one refresh
/// token is valid per account, and writing a new one invalidates the previous.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    username: Username,
    email: Email,
    full_name: FullName,
    password_hash: PasswordHash,
    refresh_token: Option<Token>,
    created_at: DateTime<Utc>,
}

impl Account {
    /// A freshly registered account, without any refresh token.
    pub fn new(
        username: Username,
        email: Email,
        full_name: FullName,
        password_hash: PasswordHash,
    ) -> Self {
        Self {
            id: AccountId::new(),
            username,
            email,
            full_name,
            password_hash,
            refresh_token: None,
            created_at: Utc::now(),
        }
    }

    /// Rebuilds an account from persisted state.
    pub fn restore(
        id: AccountId,
        username: Username,
        email: Email,
        full_name: FullName,
        password_hash: PasswordHash,
        refresh_token: Option<Token>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            full_name,
            password_hash,
            refresh_token,
            created_at,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn refresh_token(&self) -> Option<&Token> {
        self.refresh_token.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_password_hash(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }

    pub fn set_refresh_token(&mut self, token: Option<Token>) {
        self.refresh_token = token;
    }

    /// Public projection: never carries the password hash or the refresh token.
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            username: self.username.as_str().to_owned(),
            email: self.email.as_str().to_owned(),
            full_name: self.full_name.as_str().to_owned(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}
