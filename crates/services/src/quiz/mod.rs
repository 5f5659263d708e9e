mod controller;
mod snapshot;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use quiz_core::quiz::{QuizError, QuizEvent, QuizState, QuizTiming};
pub use snapshot::QuizSnapshot;
