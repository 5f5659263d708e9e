use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A quiz topic. Each subject selects a fixed, ordered question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Math,
    English,
    Science,
}

impl Subject {
    /// All subjects in picker order.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::English, Subject::Science];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::Science => "Science",
        }
    }

    /// Lower-case route segment, e.g. `/learn/math`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Science => "science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown subject: {0}")]
pub struct SubjectParseError(pub String);

impl FromStr for Subject {
    type Err = SubjectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Subject::ALL
            .into_iter()
            .find(|subject| subject.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SubjectParseError(trimmed.to_string()))
    }
}
