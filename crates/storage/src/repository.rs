use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quiz_core::model::{
    Account, AccountId, UserQuestion, UserQuestionId, Username, ValidatedUserQuestion,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Account data needed to create a new row; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewAccountRecord {
    pub username: Username,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Stored account together with its password hash.
///
/// The hash stays in this record so the domain `Account` never carries it.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub account: Account,
    pub password_hash: String,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the username is taken, or other storage errors.
    async fn insert_account(&self, record: NewAccountRecord) -> Result<Account, StorageError>;

    /// Look an account up by username.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn find_account(&self, username: &Username)
    -> Result<Option<AccountRecord>, StorageError>;
}

/// Append-only store of learner questions, scoped per username.
#[async_trait]
pub trait UserQuestionRepository: Send + Sync {
    /// Store a question for `username`, assigning a new, increasing id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the question cannot be stored.
    async fn append_question(
        &self,
        username: &Username,
        question: ValidatedUserQuestion,
    ) -> Result<UserQuestion, StorageError>;

    /// All questions of `username`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the questions cannot be read.
    async fn list_questions(&self, username: &Username) -> Result<Vec<UserQuestion>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    accounts: Arc<Mutex<HashMap<Username, AccountRecord>>>,
    questions: Arc<Mutex<HashMap<Username, Vec<UserQuestion>>>>,
    next_account_id: Arc<AtomicU64>,
    next_question_id: Arc<AtomicU64>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryRepository {
    async fn insert_account(&self, record: NewAccountRecord) -> Result<Account, StorageError> {
        let mut guard = self
            .accounts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(&record.username) {
            return Err(StorageError::Conflict);
        }
        let id = AccountId::new(self.next_account_id.fetch_add(1, Ordering::Relaxed) + 1);
        let account = Account::new(
            id,
            record.username.clone(),
            record.display_name,
            record.created_at,
        );
        guard.insert(
            record.username,
            AccountRecord {
                account: account.clone(),
                password_hash: record.password_hash,
            },
        );
        Ok(account)
    }

    async fn find_account(
        &self,
        username: &Username,
    ) -> Result<Option<AccountRecord>, StorageError> {
        let guard = self
            .accounts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(username).cloned())
    }
}

#[async_trait]
impl UserQuestionRepository for InMemoryRepository {
    async fn append_question(
        &self,
        username: &Username,
        question: ValidatedUserQuestion,
    ) -> Result<UserQuestion, StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = UserQuestionId::new(self.next_question_id.fetch_add(1, Ordering::Relaxed) + 1);
        let stored = question.assign_id(id);
        guard
            .entry(username.clone())
            .or_default()
            .insert(0, stored.clone());
        Ok(stored)
    }

    async fn list_questions(&self, username: &Username) -> Result<Vec<UserQuestion>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(username).cloned().unwrap_or_default())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub accounts: Arc<dyn AccountRepository>,
    pub user_questions: Arc<dyn UserQuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let accounts: Arc<dyn AccountRepository> = Arc::new(repo.clone());
        let user_questions: Arc<dyn UserQuestionRepository> = Arc::new(repo);
        Self {
            accounts,
            user_questions,
        }
    }
}
