use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tether_core::{
    Account, AccountId, AccountStore, AccountStoreError, CredentialStore, CredentialStoreError,
    LoginIdentifier, PasswordHash, Token,
};

/// In-memory account and credential store.
///
/// Clones share the same map. Refresh rotation happens under a single write
/// lock, so concurrent rotations of one slot have exactly one winner.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
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
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| identifier.matches(a))
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
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
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }
}

#[async_trait::async_trait]
impl CredentialStore for HashMapAccountStore {
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
