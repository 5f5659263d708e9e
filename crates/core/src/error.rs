use thiserror::Error;

use crate::model::{AccountError, QuestionError, UserQuestionError};
use crate::practice::PracticeError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Practice(#[from] PracticeError),
    #[error(transparent)]
    UserQuestion(#[from] UserQuestionError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Subject};

    #[test]
    fn layer_errors_convert_and_keep_their_message() {
        let err: Error = Question::text(" ", "cat", None).unwrap_err().into();
        assert!(matches!(err, Error::Question(QuestionError::EmptyPrompt)));
        assert_eq!(err.to_string(), "question prompt cannot be empty");

        let err: Error = QuizError::EmptySequence(Subject::Math).into();
        assert_eq!(err.to_string(), "no questions available for Math");
    }
}
