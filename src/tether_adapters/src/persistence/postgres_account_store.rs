use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};
use tether_core::{
    Account, AccountId, AccountStore, AccountStoreError, CredentialStore, CredentialStoreError,
    Email, FullName, LoginIdentifier, PasswordHash, Token, Username,
};
use uuid::Uuid;

const ACCOUNT_COLUMNS: &str =
    "id, username, email, full_name, password_hash, refresh_token, created_at";

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

fn unexpected(e: impl ToString) -> AccountStoreError {
    AccountStoreError::UnexpectedError(e.to_string())
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountStoreError> {
    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let username: String = row.try_get("username").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let full_name: String = row.try_get("full_name").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
    let refresh_token: Option<String> = row.try_get("refresh_token").map_err(unexpected)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(unexpected)?;

    Ok(Account::restore(
        AccountId::from(id),
        Username::try_from(username).map_err(unexpected)?,
        Email::try_from(Secret::new(email)).map_err(unexpected)?,
        FullName::try_from(full_name).map_err(unexpected)?,
        PasswordHash::try_from(Secret::new(password_hash)).map_err(unexpected)?,
        refresh_token.map(Token::from),
        created_at,
    ))
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: Account) -> Result<(), AccountStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO accounts (id, username, email, full_name, password_hash, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.username().as_str())
        .bind(account.email().as_ref().expose_secret())
        .bind(account.full_name().as_str())
        .bind(account.password_hash().as_ref().expose_secret())
        .bind(account.created_at());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::AccountAlreadyExists;
                }
            }
            unexpected(e)
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving account by identifier from PostgreSQL", skip_all)]
    async fn find_by_identifier(
        &self,
        identifier: &LoginIdentifier,
    ) -> Result<Account, AccountStoreError> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1 OR email = $2 LIMIT 1"
        );
        let row = sqlx::query(&sql)
            .bind(identifier.username())
            .bind(identifier.email())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };
        account_from_row(&row)
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");
        let row = sqlx::query(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };
        account_from_row(&row)
    }

    #[tracing::instrument(name = "Set new password hash", skip_all)]
    async fn set_password_hash(
        &self,
        id: &AccountId,
        password_hash: PasswordHash,
    ) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET password_hash = $1
                WHERE id = $2
            "#,
        )
        .bind(password_hash.as_ref().expose_secret())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Listing accounts from PostgreSQL", skip_all)]
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY created_at");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(unexpected)?;

        rows.iter().map(account_from_row).collect()
    }
}

impl PostgresAccountStore {
    async fn write_refresh_slot(
        &self,
        id: &AccountId,
        token: Option<&Token>,
    ) -> Result<(), CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET refresh_token = $1
                WHERE id = $2
            "#,
        )
        .bind(token.map(Token::as_str))
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CredentialStoreError::AccountNotFound);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CredentialStore for PostgresAccountStore {
    #[tracing::instrument(name = "Storing refresh token", skip_all)]
    async fn set_refresh_token(
        &self,
        id: &AccountId,
        token: &Token,
    ) -> Result<(), CredentialStoreError> {
        self.write_refresh_slot(id, Some(token)).await
    }

    #[tracing::instrument(name = "Clearing refresh token", skip_all)]
    async fn clear_refresh_token(&self, id: &AccountId) -> Result<(), CredentialStoreError> {
        self.write_refresh_slot(id, None).await
    }

    #[tracing::instrument(name = "Reading refresh token", skip_all)]
    async fn get_refresh_token(
        &self,
        id: &AccountId,
    ) -> Result<Option<Token>, CredentialStoreError> {
        let row = sqlx::query("SELECT refresh_token FROM accounts WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::AccountNotFound);
        };
        let token: Option<String> = row
            .try_get("refresh_token")
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;
        Ok(token.map(Token::from))
    }

    /// One conditional `UPDATE`; the database serializes competing rotations.
    #[tracing::instrument(name = "Rotating refresh token", skip_all)]
    async fn replace_refresh_token(
        &self,
        id: &AccountId,
        presented: &Token,
        replacement: &Token,
    ) -> Result<bool, CredentialStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET refresh_token = $1
                WHERE id = $2 AND refresh_token = $3
            "#,
        )
        .bind(replacement.as_str())
        .bind(id.as_uuid())
        .bind(presented.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        let exists = sqlx::query("SELECT 1 FROM accounts WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| CredentialStoreError::UnexpectedError(e.to_string()))?;

        match exists {
            Some(_) => Ok(false),
            None => Err(CredentialStoreError::AccountNotFound),
        }
    }
}
