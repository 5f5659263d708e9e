use quiz_core::model::{Feedback, Question, Subject};
use quiz_core::quiz::{QuizSession, QuizState};

/// What the presentation layer renders after each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub subject: Option<Subject>,
    pub question: Option<Question>,
    pub feedback: Feedback,
    pub reward_active: bool,
    /// One-based position and sequence length.
    pub position: Option<(usize, usize)>,
    /// Subject whose sequence was just completed, until another is chosen.
    pub completed: Option<Subject>,
}

impl QuizSnapshot {
    pub(crate) fn capture(quiz: &QuizSession, completed: Option<Subject>) -> Self {
        Self {
            state: quiz.state(),
            subject: quiz.session().map(|s| s.subject()),
            question: quiz.current_question().cloned(),
            feedback: quiz.feedback(),
            reward_active: quiz.is_reward_active(),
            position: quiz.position(),
            completed,
        }
    }

    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.state == QuizState::Browsing
    }
}
