use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quiz_core::model::{ImageData, UserQuestion, UserQuestionDraft, UserQuestionId, Username};
use quiz_core::practice::{self, PracticeSession};
use storage::repository::UserQuestionRepository;
use tracing::{info, warn};

use crate::Clock;
use crate::error::PersonalizedError;

/// Authoring and practice over a learner's own questions.
#[derive(Clone)]
pub struct PersonalizedService {
    clock: Clock,
    questions: Arc<dyn UserQuestionRepository>,
}

impl PersonalizedService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn UserQuestionRepository>) -> Self {
        Self { clock, questions }
    }

    /// Questions written by `username`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `PersonalizedError::Storage` if repository access fails.
    pub async fn list(&self, username: &Username) -> Result<Vec<UserQuestion>, PersonalizedError> {
        let questions = self.questions.list_questions(username).await?;
        Ok(questions)
    }

    /// Validate and store a new question.
    ///
    /// # Errors
    ///
    /// Returns `PersonalizedError::Question` when the draft is incomplete.
    /// Returns `PersonalizedError::Storage` if persistence fails.
    pub async fn append(
        &self,
        username: &Username,
        draft: UserQuestionDraft,
    ) -> Result<UserQuestion, PersonalizedError> {
        let validated = draft.validate(self.clock.now())?;
        let stored = self
            .questions
            .append_question(username, validated)
            .await
            .inspect_err(|err| warn!(%username, %err, "failed to store question"))?;
        info!(%username, id = %stored.id(), category = %stored.category(), "question added");
        Ok(stored)
    }

    /// Start practicing the selected questions in list order.
    ///
    /// # Errors
    ///
    /// Returns `PersonalizedError::Practice` when no stored question is selected.
    /// Returns `PersonalizedError::Storage` if repository access fails.
    pub async fn start_practice(
        &self,
        username: &Username,
        selected: &[UserQuestionId],
    ) -> Result<PracticeSession, PersonalizedError> {
        let questions = self.questions.list_questions(username).await?;
        let session = PracticeSession::start(practice::select(&questions, selected))?;
        Ok(session)
    }
}

/// Encode raw image bytes as a data URL, using `extension` for the media type.
///
/// # Errors
///
/// Returns `PersonalizedError::UnsupportedImage` for unknown extensions.
pub fn image_data_from_bytes(extension: &str, bytes: &[u8]) -> Result<ImageData, PersonalizedError> {
    let media_type = media_type_for(extension)
        .ok_or_else(|| PersonalizedError::UnsupportedImage(extension.to_string()))?;
    let url = format!("data:{media_type};base64,{}", STANDARD.encode(bytes));
    Ok(ImageData::parse(url)?)
}

/// Read an image file into a data URL.
///
/// # Errors
///
/// Returns `PersonalizedError::UnsupportedImage` for unknown extensions and
/// `PersonalizedError::ImageRead` if the file cannot be read.
pub async fn image_data_from_path(path: &Path) -> Result<ImageData, PersonalizedError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if media_type_for(&extension).is_none() {
        return Err(PersonalizedError::UnsupportedImage(path.display().to_string()));
    }
    let bytes = tokio::fs::read(path).await?;
    image_data_from_bytes(&extension, &bytes)
}

fn media_type_for(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
