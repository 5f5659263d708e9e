use quiz_core::model::{
    Account, AccountId, Category, ImageData, UserQuestion, UserQuestionId, Username,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn account_id_from_i64(v: i64) -> Result<AccountId, StorageError> {
    Ok(AccountId::new(i64_to_u64("account_id", v)?))
}

pub(crate) fn user_question_id_from_i64(v: i64) -> Result<UserQuestionId, StorageError> {
    Ok(UserQuestionId::new(i64_to_u64("user_question_id", v)?))
}

pub(crate) fn account_from_row(row: &SqliteRow) -> Result<(Account, String), StorageError> {
    let id = account_id_from_i64(row.try_get("id").map_err(ser)?)?;
    let username: String = row.try_get("username").map_err(ser)?;
    let username = Username::parse(&username).map_err(ser)?;
    let display_name: String = row.try_get("display_name").map_err(ser)?;
    let password_hash: String = row.try_get("password_hash").map_err(ser)?;
    let created_at = row.try_get("created_at").map_err(ser)?;

    Ok((
        Account::new(id, username, display_name, created_at),
        password_hash,
    ))
}

pub(crate) fn user_question_from_row(row: &SqliteRow) -> Result<UserQuestion, StorageError> {
    let id = user_question_id_from_i64(row.try_get("id").map_err(ser)?)?;
    let category: String = row.try_get("category").map_err(ser)?;
    let category: Category = category.parse().map_err(ser)?;
    let image: Option<String> = row.try_get("image").map_err(ser)?;
    let image = image.map(ImageData::parse).transpose().map_err(ser)?;

    UserQuestion::from_persisted(
        id,
        category,
        row.try_get("prompt").map_err(ser)?,
        image,
        row.try_get("answer").map_err(ser)?,
        row.try_get("created_at").map_err(ser)?,
    )
    .map_err(ser)
}
