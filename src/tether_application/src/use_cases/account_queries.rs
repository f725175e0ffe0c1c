use tether_core::{
    AccountId, AccountProfile, AccountStore, AccountStoreError, Token, TokenCodec,
    TokenCodecError, TokenKind,
};

use crate::error::{ClassifiedError, ErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum AccountQueryError {
    #[error("UnAuthorized Request")]
    Unauthorized,
    #[error("Invalid Access Token")]
    InvalidAccessToken,
    #[error("Invalid Refresh Token")]
    InvalidRefreshToken,
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
    #[error("Token codec error: {0}")]
    TokenCodecError(TokenCodecError),
}

impl ClassifiedError for AccountQueryError {
    fn kind(&self) -> ErrorKind {
        match self {
            AccountQueryError::Unauthorized
            | AccountQueryError::InvalidAccessToken
            | AccountQueryError::InvalidRefreshToken => ErrorKind::Authentication,
            AccountQueryError::AccountStoreError(_) | AccountQueryError::TokenCodecError(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// Read-only lookups of account profiles, either for an already authenticated
/// account or by resolving a presented token.
pub struct AccountQueries<A, T> {
    account_store: A,
    token_codec: T,
}

impl<A, T> AccountQueries<A, T>
where
    A: AccountStore,
    T: TokenCodec,
{
    pub fn new(account_store: A, token_codec: T) -> Self {
        Self {
            account_store,
            token_codec,
        }
    }

    #[tracing::instrument(name = "AccountQueries::current_account", skip(self))]
    pub async fn current_account(
        &self,
        account_id: &AccountId,
    ) -> Result<AccountProfile, AccountQueryError> {
        self.account_store
            .find_by_id(account_id)
            .await
            .map(|account| account.profile())
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => AccountQueryError::InvalidAccessToken,
                e => AccountQueryError::AccountStoreError(e),
            })
    }

    #[tracing::instrument(name = "AccountQueries::account_from_access_token", skip_all)]
    pub async fn account_from_access_token(
        &self,
        token: Option<Token>,
    ) -> Result<AccountProfile, AccountQueryError> {
        self.resolve(token, TokenKind::Access, AccountQueryError::InvalidAccessToken)
            .await
    }

    #[tracing::instrument(name = "AccountQueries::account_from_refresh_token", skip_all)]
    pub async fn account_from_refresh_token(
        &self,
        token: Option<Token>,
    ) -> Result<AccountProfile, AccountQueryError> {
        self.resolve(token, TokenKind::Refresh, AccountQueryError::InvalidRefreshToken)
            .await
    }

    #[tracing::instrument(name = "AccountQueries::list_accounts", skip(self))]
    pub async fn list_accounts(&self) -> Result<Vec<AccountProfile>, AccountQueryError> {
        let mut profiles: Vec<_> = self
            .account_store
            .list_accounts()
            .await?
            .iter()
            .map(|account| account.profile())
            .collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    async fn resolve(
        &self,
        token: Option<Token>,
        kind: TokenKind,
        invalid: AccountQueryError,
    ) -> Result<AccountProfile, AccountQueryError> {
        let token = token
            .filter(|t| !t.as_str().trim().is_empty())
            .ok_or(AccountQueryError::Unauthorized)?;

        let account_id = match self.token_codec.verify(token.as_str(), kind) {
            Ok(id) => id,
            Err(TokenCodecError::Rejected(reason)) => {
                tracing::debug!(?reason, %kind, "token rejected");
                return Err(invalid);
            }
            Err(e) => return Err(AccountQueryError::TokenCodecError(e)),
        };

        match self.account_store.find_by_id(&account_id).await {
            Ok(account) => Ok(account.profile()),
            Err(AccountStoreError::AccountNotFound) => Err(invalid),
            Err(e) => Err(e.into()),
        }
    }
}
