mod auth_vm;
mod illustration;
mod practice_vm;
mod quiz_vm;
mod time_fmt;
mod user_question_vm;

pub use auth_vm::{AuthMode, auth_error_message};
pub use illustration::illustration_src;
pub use practice_vm::{PracticeIntent, apply_practice_intent};
pub use quiz_vm::{
    AnswerInputVm, ChoiceVm, FeedbackVm, QuizCardVm, QuizIntent, QuizScreen, apply_intent,
    map_quiz_card, quiz_screen,
};
pub use time_fmt::format_added_on;
pub use user_question_vm::{UserQuestionRowVm, map_user_question_rows, toggle_selection};
