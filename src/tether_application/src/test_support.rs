//! In-memory ports shared by the use-case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tether_core::{
    Account, AccountId, AccountStore, AccountStoreError, CredentialStore, CredentialStoreError,
    Email, FullName, LoginIdentifier, Password, PasswordHash, PasswordHasher, PasswordHasherError,
    Token, TokenCodec, TokenCodecError, TokenKind, TokenRejection, Username,
};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl MockAccountStore {
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(*account.id(), account);
    }

    pub async fn stored_refresh_token(&self, id: &AccountId) -> Option<Token> {
        self.accounts
            .read()
            .await
            .get(id)
            .and_then(|a| a.refresh_token().cloned())
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|a| a.username() == account.username() || a.email() == account.email())
        {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        accounts.insert(*account.id(), account);
        Ok(())
    }

    async fn find_by_identifier(
        &self,
        identifier: &LoginIdentifier,
    ) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| identifier.matches(a))
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn set_password_hash(
        &self,
        id: &AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(AccountStoreError::AccountNotFound)?;
        account.set_password_hash(password_hash);
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl CredentialStore for MockAccountStore {
    async fn set_refresh_token(
        &self,
        id: &AccountId,
        token: &Token,
    ) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(CredentialStoreError::AccountNotFound)?;
        account.set_refresh_token(Some(token.clone()));
        Ok(())
    }

    async fn clear_refresh_token(&self, id: &AccountId) -> Result<(), CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(CredentialStoreError::AccountNotFound)?;
        account.set_refresh_token(None);
        Ok(())
    }

    async fn get_refresh_token(
        &self,
        id: &AccountId,
    ) -> Result<Option<Token>, CredentialStoreError> {
        let accounts = self.accounts.read().await;
        let account = accounts.get(id).ok_or(CredentialStoreError::AccountNotFound)?;
        Ok(account.refresh_token().cloned())
    }

    async fn replace_refresh_token(
        &self,
        id: &AccountId,
        presented: &Token,
        replacement: &Token,
    ) -> Result<bool, CredentialStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(id).ok_or(CredentialStoreError::AccountNotFound)?;
        if account.refresh_token() != Some(presented) {
            return Ok(false);
        }
        account.set_refresh_token(Some(replacement.clone()));
        Ok(true)
    }
}

/// Tokens of the form `<kind>.<account id>.<serial>`; unsigned but unique.
#[derive(Clone, Default)]
pub struct FakeTokenCodec {
    serial: Arc<AtomicU64>,
    failing_kind: Option<TokenKind>,
}

impl FakeTokenCodec {
    pub fn failing_on(kind: TokenKind) -> Self {
        Self {
            serial: Arc::default(),
            failing_kind: Some(kind),
        }
    }
}

impl TokenCodec for FakeTokenCodec {
    fn issue(&self, account_id: &AccountId, kind: TokenKind) -> Result<Token, TokenCodecError> {
        if self.failing_kind == Some(kind) {
            return Err(TokenCodecError::Signing("signing key unavailable".to_owned()));
        }
        let serial = self.serial.fetch_add(1, Ordering::SeqCst);
        Ok(Token::from(format!("{kind}.{account_id}.{serial}")))
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<AccountId, TokenCodecError> {
        let mut parts = token.split('.');
        let (Some(kind), Some(id), Some(_), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenCodecError::Rejected(TokenRejection::Malformed));
        };
        if kind != expected.to_string() {
            return Err(TokenCodecError::Rejected(TokenRejection::WrongKind));
        }
        id.parse()
            .map_err(|_| TokenCodecError::Rejected(TokenRejection::Malformed))
    }
}

/// Stores `$plain$<password>`; good enough to exercise the flows.
#[derive(Clone, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let hash = format!("$plain${}", password.as_ref().expose_secret());
        PasswordHash::try_from(Secret::new(hash))
            .map_err(|e| PasswordHasherError::Hashing(e.to_string()))
    }

    async fn verify_password(
        &self,
        password_hash: &PasswordHash,
        candidate: &Password,
    ) -> Result<bool, PasswordHasherError> {
        let expected = password_hash
            .as_str()
            .strip_prefix("$plain$")
            .ok_or_else(|| PasswordHasherError::MalformedHash("missing prefix".to_owned()))?;
        Ok(expected == candidate.as_ref().expose_secret())
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_owned())
}

/// Seeds `alice` / `a@x.com` / `secret123`.
pub async fn seed_alice(store: &MockAccountStore) -> AccountId {
    let password_hash = PlainPasswordHasher
        .hash_password(&Password::try_from(secret("secret123")).unwrap())
        .await
        .unwrap();
    let account = Account::new(
        Username::try_from("alice".to_owned()).unwrap(),
        Email::try_from(secret("a@x.com")).unwrap(),
        FullName::try_from("Alice Liddell".to_owned()).unwrap(),
        password_hash,
    );
    let id = *account.id();
    store.insert(account).await;
    id
}
