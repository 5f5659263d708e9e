use quiz_core::model::{AnswerShape, Feedback, Subject};
use services::QuizSnapshot;
use services::quiz::{QuizController, QuizError};

use super::illustration::illustration_src;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(Subject),
    Submit(String),
    Retry,
    Continue,
    Quit,
}

impl QuizIntent {
    /// Whether the typed answer should be cleared after this intent.
    #[must_use]
    pub fn clears_input(&self) -> bool {
        !matches!(self, QuizIntent::Submit(_))
    }
}

/// # Errors
///
/// Returns `QuizError` when the intent is not legal in the current state.
pub fn apply_intent(quiz: &QuizController, intent: QuizIntent) -> Result<QuizSnapshot, QuizError> {
    match intent {
        QuizIntent::Choose(subject) => quiz.choose_subject(subject),
        QuizIntent::Submit(answer) => quiz.submit_answer(&answer),
        QuizIntent::Retry => quiz.retry(),
        QuizIntent::Continue => quiz.advance(),
        QuizIntent::Quit => Ok(quiz.quit()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub label: String,
    /// Marks the right choice once it has been picked.
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerInputVm {
    Choices(Vec<ChoiceVm>),
    Text { hint: Option<String> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub subject_label: String,
    pub progress_label: String,
    pub prompt: String,
    pub image_src: Option<String>,
    pub input: AnswerInputVm,
    pub feedback: Option<FeedbackVm>,
    /// Inputs are disabled while a verdict is shown.
    pub locked: bool,
    pub can_retry: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Picker { completed: Option<String> },
    Question(QuizCardVm),
    Reward,
}

#[must_use]
pub fn quiz_screen(snapshot: &QuizSnapshot) -> QuizScreen {
    if snapshot.reward_active {
        return QuizScreen::Reward;
    }
    match map_quiz_card(snapshot) {
        Some(card) => QuizScreen::Question(card),
        None => QuizScreen::Picker {
            completed: snapshot
                .completed
                .map(|subject| format!("All done with {subject}! Pick another subject.")),
        },
    }
}

#[must_use]
pub fn map_quiz_card(snapshot: &QuizSnapshot) -> Option<QuizCardVm> {
    let question = snapshot.question.as_ref()?;
    let subject = snapshot.subject?;
    let (position, total) = snapshot.position.unwrap_or((1, 1));

    let correct = snapshot.feedback == Feedback::Correct;
    let input = match question.shape() {
        AnswerShape::Choice { choices, answer } => AnswerInputVm::Choices(
            choices
                .iter()
                .map(|label| ChoiceVm {
                    label: label.clone(),
                    highlighted: correct && label == answer,
                })
                .collect(),
        ),
        AnswerShape::Text { hint, .. } => AnswerInputVm::Text { hint: hint.clone() },
    };

    let feedback = snapshot.feedback.message().map(|message| FeedbackVm {
        message,
        class: if correct {
            "feedback correct"
        } else {
            "feedback wrong"
        },
    });

    Some(QuizCardVm {
        subject_label: subject.name().to_string(),
        progress_label: format!("Question {position} of {total}"),
        prompt: question.prompt().to_string(),
        image_src: question.illustration().map(illustration_src),
        input,
        feedback,
        locked: !snapshot.feedback.is_none(),
        can_retry: snapshot.feedback == Feedback::Wrong,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quiz_core::Catalog;
    use quiz_core::model::Question;
    use quiz_core::quiz::{QuizState, QuizTiming};
    use tokio::runtime::Handle;

    fn snapshot(question: Question, feedback: Feedback) -> QuizSnapshot {
        QuizSnapshot {
            state: QuizState::Answering,
            subject: Some(Subject::Math),
            question: Some(question),
            feedback,
            reward_active: false,
            position: Some((1, 2)),
            completed: None,
        }
    }

    #[test]
    fn correct_choice_is_highlighted_and_locked() {
        let q = Question::choice("What is 2 + 3?", ["4", "5", "6"], "5").unwrap();
        let card = map_quiz_card(&snapshot(q, Feedback::Correct)).unwrap();
        let AnswerInputVm::Choices(choices) = &card.input else {
            panic!("expected choices");
        };
        let highlighted: Vec<_> = choices.iter().filter(|c| c.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].label, "5");
        assert!(card.locked);
        assert!(!card.can_retry);
        assert_eq!(card.progress_label, "Question 1 of 2");
        assert_eq!(card.feedback.unwrap().message, "Correct. Nice work");
    }

    #[test]
    fn wrong_text_answer_offers_retry() {
        let q = Question::text("Spell it.", "cat", Some("Meow".to_string())).unwrap();
        let card = map_quiz_card(&snapshot(q, Feedback::Wrong)).unwrap();
        assert_eq!(card.input, AnswerInputVm::Text { hint: Some("Meow".to_string()) });
        assert!(card.can_retry);
        assert_eq!(card.feedback.unwrap().class, "feedback wrong");
    }

    #[test]
    fn reward_and_picker_screens() {
        let q = Question::choice("What is 2 + 3?", ["4", "5", "6"], "5").unwrap();
        let mut snap = snapshot(q, Feedback::Correct);
        snap.state = QuizState::Reward;
        snap.reward_active = true;
        assert_eq!(quiz_screen(&snap), QuizScreen::Reward);

        let done = QuizSnapshot {
            state: QuizState::Browsing,
            subject: None,
            question: None,
            feedback: Feedback::None,
            reward_active: false,
            position: None,
            completed: Some(Subject::Science),
        };
        assert_eq!(
            quiz_screen(&done),
            QuizScreen::Picker {
                completed: Some("All done with Science! Pick another subject.".to_string())
            }
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn intents_drive_the_controller() {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let quiz = QuizController::new(catalog, QuizTiming::default(), Handle::current());

        let snap = apply_intent(&quiz, QuizIntent::Choose(Subject::English)).unwrap();
        assert_eq!(snap.position, Some((1, 2)));

        let snap = apply_intent(&quiz, QuizIntent::Submit("dog".to_string())).unwrap();
        assert!(matches!(
            quiz_screen(&snap),
            QuizScreen::Question(card) if card.can_retry
        ));
        assert!(apply_intent(&quiz, QuizIntent::Continue).is_err());

        apply_intent(&quiz, QuizIntent::Retry).unwrap();
        let snap = apply_intent(&quiz, QuizIntent::Quit).unwrap();
        assert!(snap.is_browsing());
        assert!(QuizIntent::Quit.clears_input());
        assert!(!QuizIntent::Submit(String::new()).clears_input());
    }
}
