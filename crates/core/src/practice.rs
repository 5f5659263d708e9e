//! Practice over a learner's own questions.

use thiserror::Error;

use crate::model::{UserQuestion, UserQuestionId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PracticeError {
    #[error("select at least one question to practice")]
    EmptySelection,

    #[error("cannot {action} in the current practice step")]
    Rejected { action: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticePhase {
    Prompt,
    Attempted { correct: bool },
    Finished,
}

/// Keep the questions whose id is selected, in list order.
#[must_use]
pub fn select(questions: &[UserQuestion], selected: &[UserQuestionId]) -> Vec<UserQuestion> {
    questions
        .iter()
        .filter(|q| selected.contains(&q.id()))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSession {
    questions: Vec<UserQuestion>,
    index: usize,
    phase: PracticePhase,
}

impl PracticeSession {
    /// # Errors
    ///
    /// Returns `PracticeError::EmptySelection` when `questions` is empty.
    pub fn start(questions: Vec<UserQuestion>) -> Result<Self, PracticeError> {
        if questions.is_empty() {
            return Err(PracticeError::EmptySelection);
        }
        Ok(Self {
            questions,
            index: 0,
            phase: PracticePhase::Prompt,
        })
    }

    #[must_use]
    pub fn phase(&self) -> PracticePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == PracticePhase::Finished
    }

    #[must_use]
    pub fn current(&self) -> Option<&UserQuestion> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.index)
    }

    /// One-based position and total, e.g. `(1, 3)`.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.questions.len())
    }

    /// Grade an attempt for the current question.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Rejected` unless a prompt is waiting for an answer.
    pub fn submit(&mut self, attempt: &str) -> Result<bool, PracticeError> {
        if self.phase != PracticePhase::Prompt {
            return Err(PracticeError::Rejected { action: "submit" });
        }
        let correct = self
            .questions
            .get(self.index)
            .is_some_and(|q| q.is_correct(attempt));
        self.phase = PracticePhase::Attempted { correct };
        Ok(correct)
    }

    /// # Errors
    ///
    /// Returns `PracticeError::Rejected` unless an attempt was just graded.
    pub fn retry(&mut self) -> Result<(), PracticeError> {
        if !matches!(self.phase, PracticePhase::Attempted { .. }) {
            return Err(PracticeError::Rejected { action: "retry" });
        }
        self.phase = PracticePhase::Prompt;
        Ok(())
    }

    /// Move to the next selected question, or finish after the last.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Rejected` unless an attempt was just graded.
    pub fn next(&mut self) -> Result<PracticePhase, PracticeError> {
        if !matches!(self.phase, PracticePhase::Attempted { .. }) {
            return Err(PracticeError::Rejected { action: "move on" });
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.phase = PracticePhase::Prompt;
        } else {
            self.phase = PracticePhase::Finished;
        }
        Ok(self.phase)
    }
}
