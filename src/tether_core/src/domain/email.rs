use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use crate::domain::account::AccountError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A syntactically valid, lowercased email address.
///
/// Emails are personal data, so the value is kept behind a [`Secret`] and only
/// exposed where it has to be compared or persisted.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let normalized = value.expose_secret().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(AccountError::InvalidEmail);
        }
        Ok(Self(Secret::new(normalized)))
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}
