use serde::{Deserialize, Serialize};

/// Verdict shown after an answer submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

impl Feedback {
    #[must_use]
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Feedback::Correct
        } else {
            Feedback::Wrong
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Feedback::None)
    }

    /// Learner-facing line for this verdict, if any.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::Correct => Some("Correct. Nice work"),
            Feedback::Wrong => Some("Wrong, but we can try again"),
        }
    }
}
