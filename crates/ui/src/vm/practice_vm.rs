use quiz_core::practice::{PracticePhase, PracticeSession};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    Submit(String),
    Retry,
    Next,
}

/// Apply a learner action to the practice session.
///
/// Returns the phase the session landed in, or `None` when the action was
/// skipped. Blank attempts are never graded.
pub fn apply_practice_intent(
    session: &mut PracticeSession,
    intent: PracticeIntent,
) -> Option<PracticePhase> {
    let outcome = match intent {
        PracticeIntent::Submit(attempt) if attempt.trim().is_empty() => return None,
        PracticeIntent::Submit(attempt) => session.submit(&attempt).map(|_| session.phase()),
        PracticeIntent::Retry => session.retry().map(|()| session.phase()),
        PracticeIntent::Next => session.next(),
    };
    match outcome {
        Ok(phase) => Some(phase),
        Err(err) => {
            debug!(%err, "practice action ignored");
            None
        }
    }
}
