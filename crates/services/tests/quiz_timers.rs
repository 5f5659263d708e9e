use std::sync::Arc;
use std::time::Duration;

use quiz_core::Catalog;
use quiz_core::model::{Feedback, Question, Subject};
use services::quiz::{QuizController, QuizError, QuizState, QuizTiming};
use tokio::runtime::Handle;

const REVEAL: Duration = Duration::from_secs(1);
const REWARD: Duration = Duration::from_secs(180);

fn math_catalog() -> Arc<Catalog> {
    let questions = vec![
        Question::choice("What is 2 + 3?", ["4", "5", "6"], "5").unwrap(),
        Question::choice("What is 7 - 4?", ["2", "3", "4"], "3").unwrap(),
    ];
    Arc::new(Catalog::new().with_sequence(Subject::Math, questions))
}

fn controller() -> QuizController {
    let timing = QuizTiming {
        reveal_delay: REVEAL,
        reward_duration: REWARD,
    };
    QuizController::new(math_catalog(), timing, Handle::current())
}

async fn wait(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn correct_answer_reveals_reward_then_auto_advances() {
    let quiz = controller();
    quiz.choose_subject(Subject::Math).unwrap();

    let snap = quiz.submit_answer("5").unwrap();
    assert_eq!(snap.feedback, Feedback::Correct);
    assert_eq!(snap.state, QuizState::Answering);
    assert_eq!(quiz.pending_timers(), 1);

    wait(REVEAL + Duration::from_millis(10)).await;
    let snap = quiz.snapshot();
    assert_eq!(snap.state, QuizState::Reward);
    assert!(snap.reward_active);
    assert_eq!(quiz.pending_timers(), 1);

    wait(REWARD).await;
    let snap = quiz.snapshot();
    assert_eq!(snap.state, QuizState::Answering);
    assert_eq!(snap.position, Some((2, 2)));
    assert_eq!(snap.feedback, Feedback::None);
    assert_eq!(quiz.pending_timers(), 0);
}

#[tokio::test(start_paused = true)]
async fn continue_cancels_the_auto_advance_timer() {
    let quiz = controller();
    quiz.choose_subject(Subject::Math).unwrap();
    quiz.submit_answer("5").unwrap();
    wait(REVEAL + Duration::from_millis(10)).await;

    let snap = quiz.advance().unwrap();
    assert_eq!(snap.position, Some((2, 2)));
    assert_eq!(quiz.pending_timers(), 0);

    // The cancelled reward timer must not skip the second question.
    wait(REWARD * 2).await;
    let snap = quiz.snapshot();
    assert_eq!(snap.state, QuizState::Answering);
    assert_eq!(snap.position, Some((2, 2)));
}

#[tokio::test(start_paused = true)]
async fn quit_during_reveal_never_shows_reward() {
    let quiz = controller();
    quiz.choose_subject(Subject::Math).unwrap();
    quiz.submit_answer(" 5 ").unwrap();

    let snap = quiz.quit();
    assert!(snap.is_browsing());
    assert_eq!(quiz.pending_timers(), 0);

    wait(REVEAL * 5).await;
    let snap = quiz.snapshot();
    assert!(snap.is_browsing());
    assert!(!snap.reward_active);
    assert_eq!(snap.subject, None);
}

#[tokio::test(start_paused = true)]
async fn finishing_the_sequence_reports_completion() {
    let quiz = controller();
    quiz.choose_subject(Subject::Math).unwrap();
    for answer in ["5", "3"] {
        quiz.submit_answer(answer).unwrap();
        wait(REVEAL + Duration::from_millis(10)).await;
        quiz.advance().unwrap();
    }

    let snap = quiz.snapshot();
    assert!(snap.is_browsing());
    assert_eq!(snap.completed, Some(Subject::Math));

    let snap = quiz.choose_subject(Subject::Math).unwrap();
    assert_eq!(snap.completed, None);
    assert_eq!(snap.position, Some((1, 2)));
}

#[tokio::test(start_paused = true)]
async fn wrong_answer_needs_retry_and_schedules_nothing() {
    let quiz = controller();
    quiz.choose_subject(Subject::Math).unwrap();

    let snap = quiz.submit_answer("6").unwrap();
    assert_eq!(snap.feedback, Feedback::Wrong);
    assert_eq!(quiz.pending_timers(), 0);

    let err = quiz.submit_answer("5").unwrap_err();
    assert!(matches!(err, QuizError::Rejected { .. }));

    let snap = quiz.retry().unwrap();
    assert_eq!(snap.feedback, Feedback::None);
    assert_eq!(snap.position, Some((1, 2)));
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_timer_driven_changes() {
    let quiz = controller();
    let mut updates = quiz.subscribe();
    quiz.choose_subject(Subject::Math).unwrap();
    quiz.submit_answer("5").unwrap();
    updates.borrow_and_update();

    wait(REVEAL + Duration::from_millis(10)).await;
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().state, QuizState::Reward);
}

#[tokio::test(start_paused = true)]
async fn rejected_events_leave_the_snapshot_alone() {
    let quiz = controller();
    let before = quiz.snapshot();

    assert!(quiz.advance().is_err());
    assert!(quiz.retry().is_err());
    assert!(quiz.submit_answer("5").is_err());
    assert_eq!(quiz.snapshot(), before);

    quiz.choose_subject(Subject::Math).unwrap();
    let err = quiz.choose_subject(Subject::English).unwrap_err();
    assert_eq!(err.to_string(), "cannot choose subject while answering");
}
