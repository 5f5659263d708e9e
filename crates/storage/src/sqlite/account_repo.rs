use async_trait::async_trait;
use quiz_core::model::{Account, Username};

use super::SqliteRepository;
use super::mapping::{account_from_row, account_id_from_i64, conn};
use crate::repository::{AccountRecord, AccountRepository, NewAccountRecord, StorageError};

#[async_trait]
impl AccountRepository for SqliteRepository {
    async fn insert_account(&self, record: NewAccountRecord) -> Result<Account, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO accounts (username, display_name, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(record.username.as_str())
        .bind(&record.display_name)
        .bind(&record.password_hash)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
            other => conn(other),
        })?;

        let id = account_id_from_i64(res.last_insert_rowid())?;
        Ok(Account::new(
            id,
            record.username,
            record.display_name,
            record.created_at,
        ))
    }

    async fn find_account(
        &self,
        username: &Username,
    ) -> Result<Option<AccountRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, username, display_name, password_hash, created_at
            FROM accounts
            WHERE username = ?1
            ",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let (account, password_hash) = account_from_row(&row)?;
        Ok(Some(AccountRecord {
            account,
            password_hash,
        }))
    }
}
