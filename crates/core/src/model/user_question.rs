use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::UserQuestionId;
use crate::model::question::answers_match;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserQuestionError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("image must be a base64 data URL of an image, got {0:?}")]
    InvalidImage(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Topic a learner files their own question under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Math,
    English,
    Science,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Math,
        Category::English,
        Category::Science,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Math => "Math",
            Category::English => "English",
            Category::Science => "Science",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UserQuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UserQuestionError::UnknownCategory(s.to_string()))
    }
}

/// Inline picture attached to a learner question, kept as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData(String);

impl ImageData {
    /// Accept a `data:image/<type>;base64,<payload>` URL.
    ///
    /// # Errors
    ///
    /// Returns `UserQuestionError::InvalidImage` for other schemes, non-image
    /// media types, or a missing payload.
    pub fn parse(data_url: impl Into<String>) -> Result<Self, UserQuestionError> {
        let raw = data_url.into();
        let valid = raw
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split_once(";base64,"))
            .is_some_and(|(kind, payload)| !kind.is_empty() && !payload.is_empty());
        if !valid {
            let preview: String = raw.chars().take(32).collect();
            return Err(UserQuestionError::InvalidImage(preview));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Media type such as `image/png`.
    #[must_use]
    pub fn media_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("image/*")
    }
}

/// Form input for a new learner question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuestionDraft {
    pub category: Category,
    pub prompt: String,
    pub image: Option<ImageData>,
    pub answer: String,
}

impl UserQuestionDraft {
    /// Validate the draft, trimming prompt and answer.
    ///
    /// # Errors
    ///
    /// Returns `UserQuestionError::MissingFields` if prompt or answer is blank.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedUserQuestion, UserQuestionError> {
        let prompt = self.prompt.trim();
        let answer = self.answer.trim();
        if prompt.is_empty() || answer.is_empty() {
            return Err(UserQuestionError::MissingFields);
        }
        Ok(ValidatedUserQuestion {
            category: self.category,
            prompt: prompt.to_string(),
            image: self.image,
            answer: answer.to_string(),
            created_at: now,
        })
    }
}

/// A draft that passed validation and is waiting for storage to assign an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUserQuestion {
    pub category: Category,
    pub prompt: String,
    pub image: Option<ImageData>,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

impl ValidatedUserQuestion {
    #[must_use]
    pub fn assign_id(self, id: UserQuestionId) -> UserQuestion {
        UserQuestion {
            id,
            category: self.category,
            prompt: self.prompt,
            image: self.image,
            answer: self.answer,
            created_at: self.created_at,
        }
    }
}

/// A persisted learner question. Never mutated after it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuestion {
    id: UserQuestionId,
    category: Category,
    prompt: String,
    image: Option<ImageData>,
    answer: String,
    created_at: DateTime<Utc>,
}

impl UserQuestion {
    /// Rehydrate a stored question.
    ///
    /// # Errors
    ///
    /// Returns `UserQuestionError::MissingFields` if the stored prompt or answer is blank.
    pub fn from_persisted(
        id: UserQuestionId,
        category: Category,
        prompt: String,
        image: Option<ImageData>,
        answer: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, UserQuestionError> {
        if prompt.trim().is_empty() || answer.trim().is_empty() {
            return Err(UserQuestionError::MissingFields);
        }
        Ok(Self {
            id,
            category,
            prompt,
            image,
            answer,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> UserQuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn is_correct(&self, attempt: &str) -> bool {
        answers_match(&self.answer, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn blank_fields_are_rejected_with_form_message() {
        let draft = UserQuestionDraft {
            prompt: "What is 1 + 1?".into(),
            answer: "   ".into(),
            ..UserQuestionDraft::default()
        };
        let err = draft.validate(fixed_now()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn validate_trims_and_assign_id_keeps_fields() {
        let draft = UserQuestionDraft {
            category: Category::Science,
            prompt: "  Which planet is red? ".into(),
            image: None,
            answer: " Mars ".into(),
        };
        let q = draft
            .validate(fixed_now())
            .unwrap()
            .assign_id(UserQuestionId::new(7));
        assert_eq!(q.id(), UserQuestionId::new(7));
        assert_eq!(q.prompt(), "Which planet is red?");
        assert_eq!(q.answer(), "Mars");
        assert_eq!(q.category(), Category::Science);
        assert!(q.is_correct("  mars"));
        assert!(!q.is_correct("venus"));
    }

    #[test]
    fn image_data_requires_base64_image_url() {
        let ok = ImageData::parse("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(ok.media_type(), "image/png");
        assert!(ImageData::parse("data:text/plain;base64,aGk=").is_err());
        assert!(ImageData::parse("data:image/png;base64,").is_err());
        assert!(ImageData::parse("https://example.com/a.png").is_err());
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("other".parse::<Category>().unwrap(), Category::Other);
        assert!("Art".parse::<Category>().is_err());
    }
}
