mod account;
mod feedback;
mod ids;
mod question;
mod subject;
mod user_question;

pub use account::{Account, AccountError, MIN_SECRET_LEN, Username, validate_secret};
pub use feedback::Feedback;
pub use ids::{AccountId, ParseIdError, UserQuestionId};
pub use question::{AnswerShape, Illustration, Question, QuestionError, answers_match};
pub use subject::{Subject, SubjectParseError};
pub use user_question::{
    Category, ImageData, UserQuestion, UserQuestionDraft, UserQuestionError,
    ValidatedUserQuestion,
};
