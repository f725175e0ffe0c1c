use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::domain::account::AccountError;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9._-]{3,32}$").expect("username regex is valid"));

/// Unique, lowercased handle of an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AccountError::MissingField("username"));
        }
        if !USERNAME_REGEX.is_match(&normalized) {
            return Err(AccountError::InvalidUsername);
        }
        Ok(Self(normalized))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
