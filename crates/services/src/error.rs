//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AccountError, QuestionError, UserQuestionError};
use quiz_core::practice::PracticeError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by authentication. `Display` is the learner-facing message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `PersonalizedService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersonalizedError {
    #[error(transparent)]
    Question(#[from] UserQuestionError),
    #[error(transparent)]
    Practice(#[from] PracticeError),
    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
    #[error("could not read image: {0}")]
    ImageRead(#[from] std::io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] QuestionError),
    #[error("app services need a running Tokio runtime")]
    NoRuntime,
}
