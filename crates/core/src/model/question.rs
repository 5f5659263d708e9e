use thiserror::Error;
use url::Url;

use crate::model::Feedback;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question answer cannot be empty")]
    EmptyAnswer,

    #[error("choice question needs at least two choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("duplicate choice: {0}")]
    DuplicateChoice(String),

    #[error("answer {answer:?} is not one of the choices")]
    AnswerNotAChoice { answer: String },

    #[error("invalid illustration reference: {0}")]
    InvalidIllustration(String),
}

/// Compares a submitted answer against the expected one, ignoring letter case
/// and surrounding whitespace on both sides.
#[must_use]
pub fn answers_match(expected: &str, submitted: &str) -> bool {
    expected.trim().to_lowercase() == submitted.trim().to_lowercase()
}

/// Picture shown next to a question prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Illustration {
    /// An `http(s)` image URL.
    Remote(Url),
    /// An absolute path into the bundled assets, e.g. `/assets/ear.svg`.
    Asset(String),
}

impl Illustration {
    /// Parse an illustration reference.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidIllustration` for anything that is neither
    /// an absolute asset path nor an `http`/`https` URL.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        if trimmed.len() > 1 && trimmed.starts_with('/') && !trimmed.starts_with("//") {
            return Ok(Self::Asset(trimmed.to_string()));
        }
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Remote(url)),
            _ => Err(QuestionError::InvalidIllustration(trimmed.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Illustration::Remote(url) => url.as_str(),
            Illustration::Asset(path) => path,
        }
    }
}

/// How a question is answered. Exactly one shape applies per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerShape {
    /// Pick one of a small ordered set of candidates.
    Choice { choices: Vec<String>, answer: String },
    /// Type the answer; matched case-insensitively after trimming.
    Text { answer: String, hint: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    illustration: Option<Illustration>,
    shape: AnswerShape,
}

impl Question {
    /// Build a multiple-choice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank, fewer than two
    /// choices are given, two choices collide after normalisation, or the
    /// answer is not among the choices.
    pub fn choice<I, S>(
        prompt: impl Into<String>,
        choices: I,
        answer: impl Into<String>,
    ) -> Result<Self, QuestionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = non_empty_prompt(prompt.into())?;
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices { len: choices.len() });
        }
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].iter().any(|earlier| answers_match(earlier, choice)) {
                return Err(QuestionError::DuplicateChoice(choice.clone()));
            }
        }
        if !choices.iter().any(|choice| answers_match(choice, &answer)) {
            return Err(QuestionError::AnswerNotAChoice { answer });
        }

        Ok(Self {
            prompt,
            illustration: None,
            shape: AnswerShape::Choice { choices, answer },
        })
    }

    /// Build a free-text question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank.
    pub fn text(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = non_empty_prompt(prompt.into())?;
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        let hint = hint.filter(|h| !h.trim().is_empty());

        Ok(Self {
            prompt,
            illustration: None,
            shape: AnswerShape::Text { answer, hint },
        })
    }

    #[must_use]
    pub fn with_illustration(mut self, illustration: Illustration) -> Self {
        self.illustration = Some(illustration);
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn illustration(&self) -> Option<&Illustration> {
        self.illustration.as_ref()
    }

    #[must_use]
    pub fn shape(&self) -> &AnswerShape {
        &self.shape
    }

    /// Candidate answers for a choice question, `None` for a text question.
    #[must_use]
    pub fn choices(&self) -> Option<&[String]> {
        match &self.shape {
            AnswerShape::Choice { choices, .. } => Some(choices),
            AnswerShape::Text { .. } => None,
        }
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match &self.shape {
            AnswerShape::Text { hint, .. } => hint.as_deref(),
            AnswerShape::Choice { .. } => None,
        }
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        match &self.shape {
            AnswerShape::Choice { answer, .. } | AnswerShape::Text { answer, .. } => answer,
        }
    }

    /// Grade a submission. Never returns `Feedback::None`.
    #[must_use]
    pub fn check(&self, submitted: &str) -> Feedback {
        Feedback::from_match(answers_match(self.correct_answer(), submitted))
    }
}

fn non_empty_prompt(prompt: String) -> Result<String, QuestionError> {
    if prompt.trim().is_empty() {
        return Err(QuestionError::EmptyPrompt);
    }
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus() -> Question {
        Question::choice("What is 2 + 3?", ["4", "5", "6"], "5").unwrap()
    }

    #[test]
    fn choice_question_accepts_only_the_correct_candidate() {
        let q = plus();
        assert_eq!(q.check("5"), Feedback::Correct);
        assert_eq!(q.check("4"), Feedback::Wrong);
        assert_eq!(q.check("6"), Feedback::Wrong);
    }

    #[test]
    fn choice_answer_is_case_insensitive() {
        let q = Question::choice("Which part?", ["Stem", "Root", "Leaf"], "Root").unwrap();
        assert_eq!(q.check("root"), Feedback::Correct);
        assert_eq!(q.check("ROOT"), Feedback::Correct);
        assert_eq!(q.check("Leaf"), Feedback::Wrong);
    }

    #[test]
    fn text_answer_ignores_case_and_surrounding_whitespace() {
        let q = Question::text("Spell it", "cat", Some("A cute animal".into())).unwrap();
        assert_eq!(q.check("  CaT\t"), Feedback::Correct);
        assert_eq!(q.check("c at"), Feedback::Wrong);
        assert_eq!(q.hint(), Some("A cute animal"));
        assert!(q.choices().is_none());
    }

    #[test]
    fn rejects_answer_outside_choices() {
        let err = Question::choice("Q", ["a", "b"], "c").unwrap_err();
        assert_eq!(err, QuestionError::AnswerNotAChoice { answer: "c".into() });
    }

    #[test]
    fn rejects_duplicate_and_too_few_choices() {
        assert_eq!(
            Question::choice("Q", ["a", " A "], "a").unwrap_err(),
            QuestionError::DuplicateChoice(" A ".into())
        );
        assert_eq!(
            Question::choice("Q", ["a"], "a").unwrap_err(),
            QuestionError::TooFewChoices { len: 1 }
        );
    }

    #[test]
    fn rejects_blank_prompt_and_answer() {
        assert_eq!(
            Question::text("  ", "cat", None).unwrap_err(),
            QuestionError::EmptyPrompt
        );
        assert_eq!(
            Question::text("Spell", " ", None).unwrap_err(),
            QuestionError::EmptyAnswer
        );
    }

    #[test]
    fn blank_hint_is_dropped() {
        let q = Question::text("Spell", "ear", Some("   ".into())).unwrap();
        assert_eq!(q.hint(), None);
    }

    #[test]
    fn illustration_accepts_urls_and_asset_paths() {
        let remote = Illustration::parse("https://images.example.com/cat.png").unwrap();
        assert!(matches!(remote, Illustration::Remote(_)));
        let asset = Illustration::parse("/assets/ear.svg").unwrap();
        assert_eq!(asset.as_str(), "/assets/ear.svg");
        assert!(Illustration::parse("ftp://example.com/a.png").is_err());
        assert!(Illustration::parse("cat.png").is_err());
    }
}
