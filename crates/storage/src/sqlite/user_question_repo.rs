use async_trait::async_trait;
use quiz_core::model::{UserQuestion, Username, ValidatedUserQuestion};

use super::SqliteRepository;
use super::mapping::{conn, user_question_from_row, user_question_id_from_i64};
use crate::repository::{StorageError, UserQuestionRepository};

#[async_trait]
impl UserQuestionRepository for SqliteRepository {
    async fn append_question(
        &self,
        username: &Username,
        question: ValidatedUserQuestion,
    ) -> Result<UserQuestion, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO user_questions (username, category, prompt, image, answer, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
        )
        .bind(username.as_str())
        .bind(question.category.as_str())
        .bind(&question.prompt)
        .bind(question.image.as_ref().map(|image| image.as_str()))
        .bind(&question.answer)
        .bind(question.created_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        let id = user_question_id_from_i64(res.last_insert_rowid())?;
        Ok(question.assign_id(id))
    }

    async fn list_questions(&self, username: &Username) -> Result<Vec<UserQuestion>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, category, prompt, image, answer, created_at
            FROM user_questions
            WHERE username = ?1
            ORDER BY id DESC
            ",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(user_question_from_row(&row)?);
        }
        Ok(questions)
    }
}
