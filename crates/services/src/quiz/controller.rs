use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quiz_core::Catalog;
use quiz_core::model::Subject;
use quiz_core::quiz::{
    Effect, QuizError, QuizEvent, QuizSession, QuizTiming, TimerToken, Transition,
};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::debug;

use super::snapshot::QuizSnapshot;

/// Drives a `QuizSession` and owns its timers.
///
/// Scheduled timers run as tasks on the given runtime and are aborted as soon
/// as the session cancels them; a timer that still races in is rejected by the
/// session's token check. Dropping the controller aborts every pending timer.
pub struct QuizController {
    inner: Arc<Inner>,
}

struct Inner {
    runtime: Handle,
    state: Mutex<ControllerState>,
    snapshots: watch::Sender<QuizSnapshot>,
}

struct ControllerState {
    quiz: QuizSession,
    timers: HashMap<TimerToken, AbortHandle>,
    completed: Option<Subject>,
}

impl QuizController {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, timing: QuizTiming, runtime: Handle) -> Self {
        let quiz = QuizSession::new(catalog, timing);
        let (snapshots, _) = watch::channel(QuizSnapshot::capture(&quiz, None));
        Self {
            inner: Arc::new(Inner {
                runtime,
                state: Mutex::new(ControllerState {
                    quiz,
                    timers: HashMap::new(),
                    completed: None,
                }),
                snapshots,
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.inner.snapshots.borrow().clone()
    }

    /// Receiver that sees every snapshot, including ones produced by timers.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Number of timers scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.lock().timers.len()
    }

    /// # Errors
    ///
    /// Returns `QuizError` if a session is already running or the subject has no questions.
    pub fn choose_subject(&self, subject: Subject) -> Result<QuizSnapshot, QuizError> {
        self.inner.update(QuizEvent::ChooseSubject, |state| {
            let transition = state.quiz.choose_subject(subject)?;
            state.completed = None;
            Ok(transition)
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::Rejected` unless a question is waiting for an answer.
    pub fn submit_answer(&self, answer: &str) -> Result<QuizSnapshot, QuizError> {
        self.inner.update(QuizEvent::SubmitAnswer, |state| {
            state.quiz.submit_answer(answer)
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::Rejected` unless the last answer was wrong.
    pub fn retry(&self) -> Result<QuizSnapshot, QuizError> {
        self.inner
            .update(QuizEvent::Retry, |state| state.quiz.retry())
    }

    /// Skip the rest of the reward interlude.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rejected` outside the reward interlude.
    pub fn advance(&self) -> Result<QuizSnapshot, QuizError> {
        self.inner
            .update(QuizEvent::Advance, |state| state.quiz.advance())
    }

    pub fn quit(&self) -> QuizSnapshot {
        self.inner
            .update(QuizEvent::Quit, |state| Ok(state.quiz.quit()))
            .unwrap_or_else(|_| self.snapshot())
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<F>(self: &Arc<Self>, event: QuizEvent, f: F) -> Result<QuizSnapshot, QuizError>
    where
        F: FnOnce(&mut ControllerState) -> Result<Transition, QuizError>,
    {
        let mut state = self.lock();
        let subject = state.quiz.session().map(|s| s.subject());
        let transition = match f(&mut state) {
            Ok(transition) => transition,
            Err(err) => {
                debug!(%event, %err, "quiz event rejected");
                return Err(err);
            }
        };
        debug!(%event, state = %state.quiz.state(), "quiz transition");
        Ok(self.apply(&mut state, subject, transition))
    }

    fn fire(self: &Arc<Self>, token: TimerToken) {
        let mut state = self.lock();
        state.timers.remove(&token);
        let subject = state.quiz.session().map(|s| s.subject());
        match state.quiz.timer_elapsed(token) {
            Some(transition) => {
                debug!(token = token.value(), state = %state.quiz.state(), "quiz timer fired");
                self.apply(&mut state, subject, transition);
            }
            None => debug!(token = token.value(), "stale quiz timer ignored"),
        }
    }

    fn apply(
        self: &Arc<Self>,
        state: &mut ControllerState,
        subject: Option<Subject>,
        transition: Transition,
    ) -> QuizSnapshot {
        if transition.finished {
            state.completed = subject;
        }
        for effect in transition.effects {
            match effect {
                Effect::Schedule { token, after, .. } => {
                    let weak = Arc::downgrade(self);
                    let handle = self.runtime.spawn(async move {
                        tokio::time::sleep(after).await;
                        if let Some(inner) = weak.upgrade() {
                            inner.fire(token);
                        }
                    });
                    state.timers.insert(token, handle.abort_handle());
                }
                Effect::Cancel { token } => {
                    if let Some(handle) = state.timers.remove(&token) {
                        handle.abort();
                    }
                }
            }
        }

        let snapshot = QuizSnapshot::capture(&state.quiz, state.completed);
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in state.timers.drain() {
            handle.abort();
        }
    }
}
