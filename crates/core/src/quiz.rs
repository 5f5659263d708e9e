//! Quiz session state machine.
//!
//! `QuizSession` never sleeps. Transitions that need a delay return an
//! `Effect::Schedule` carrying a fresh `TimerToken`; the owner runs the timer
//! and reports back through `timer_elapsed`. Every transition that disarms a
//! timer returns `Effect::Cancel` for it, and `timer_elapsed` ignores any token
//! that is not the one currently armed.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{Feedback, Question, Subject};

/// Delays used by the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizTiming {
    /// Pause between a correct answer and the reward interlude.
    pub reveal_delay: Duration,
    /// How long the reward interlude runs before advancing on its own.
    pub reward_duration: Duration,
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_secs(1),
            reward_duration: Duration::from_secs(180),
        }
    }
}

/// Coarse state observed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizState {
    Browsing,
    Answering,
    Reward,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizState::Browsing => "browsing",
            QuizState::Answering => "answering",
            QuizState::Reward => "in reward",
        })
    }
}

/// Learner action, used to label rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizEvent {
    ChooseSubject,
    SubmitAnswer,
    Retry,
    Advance,
    Quit,
}

impl fmt::Display for QuizEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizEvent::ChooseSubject => "choose subject",
            QuizEvent::SubmitAnswer => "submit answer",
            QuizEvent::Retry => "retry",
            QuizEvent::Advance => "advance",
            QuizEvent::Quit => "quit",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {event} while {state}")]
    Rejected { event: QuizEvent, state: QuizState },

    #[error("no questions available for {0}")]
    EmptySequence(Subject),
}

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Correct answer shown; enter the reward interlude when it fires.
    RevealReward,
    /// Reward interlude running; advance when it fires.
    AutoAdvance,
}

/// Side effect the owner of a `QuizSession` must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Schedule {
        token: TimerToken,
        kind: TimerKind,
        after: Duration,
    },
    Cancel {
        token: TimerToken,
    },
}

/// What a transition did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    /// The last question of the sequence was passed and the session cleared.
    pub finished: bool,
}

/// The learner's position inside a subject's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Session {
    subject: Subject,
    index: usize,
}

impl Session {
    #[must_use]
    pub fn subject(&self) -> Subject {
        self.subject
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArmedTimer {
    token: TimerToken,
    kind: TimerKind,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<Catalog>,
    timing: QuizTiming,
    session: Option<Session>,
    feedback: Feedback,
    reward_active: bool,
    armed: Option<ArmedTimer>,
    next_token: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, timing: QuizTiming) -> Self {
        Self {
            catalog,
            timing,
            session: None,
            feedback: Feedback::None,
            reward_active: false,
            armed: None,
            next_token: 1,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        match (self.session, self.reward_active) {
            (None, _) => QuizState::Browsing,
            (Some(_), true) => QuizState::Reward,
            (Some(_), false) => QuizState::Answering,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub fn is_reward_active(&self) -> bool {
        self.reward_active
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let session = self.session?;
        self.catalog.question(session.subject, session.index)
    }

    /// One-based position and sequence length, e.g. `(1, 2)`.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        let session = self.session?;
        Some((
            session.index + 1,
            self.catalog.sequence(session.subject).len(),
        ))
    }

    /// Token of the timer that is currently allowed to fire.
    #[must_use]
    pub fn armed_timer(&self) -> Option<(TimerToken, TimerKind)> {
        self.armed.map(|armed| (armed.token, armed.kind))
    }

    /// Start `subject` at its first question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rejected` unless browsing, and
    /// `QuizError::EmptySequence` if the subject has no questions.
    pub fn choose_subject(&mut self, subject: Subject) -> Result<Transition, QuizError> {
        self.expect_state(QuizEvent::ChooseSubject, QuizState::Browsing)?;
        if self.catalog.sequence(subject).is_empty() {
            return Err(QuizError::EmptySequence(subject));
        }

        let mut transition = Transition::default();
        self.disarm(&mut transition);
        self.session = Some(Session { subject, index: 0 });
        self.feedback = Feedback::None;
        self.reward_active = false;
        Ok(transition)
    }

    /// Grade an answer for the current question.
    ///
    /// A correct answer schedules the reward interlude; a wrong one waits for
    /// `retry`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rejected` unless answering with no verdict shown yet.
    pub fn submit_answer(&mut self, answer: &str) -> Result<Transition, QuizError> {
        self.expect_state(QuizEvent::SubmitAnswer, QuizState::Answering)?;
        if !self.feedback.is_none() {
            return Err(self.rejected(QuizEvent::SubmitAnswer));
        }
        let Some(question) = self.current_question() else {
            return Err(self.rejected(QuizEvent::SubmitAnswer));
        };

        let feedback = question.check(answer);
        self.feedback = feedback;

        let mut transition = Transition::default();
        if feedback == Feedback::Correct {
            if self.timing.reveal_delay.is_zero() {
                self.enter_reward(&mut transition);
            } else {
                self.arm(
                    TimerKind::RevealReward,
                    self.timing.reveal_delay,
                    &mut transition,
                );
            }
        }
        Ok(transition)
    }

    /// Clear a wrong verdict so the learner can answer again.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rejected` unless the current verdict is wrong.
    pub fn retry(&mut self) -> Result<Transition, QuizError> {
        if self.state() != QuizState::Answering || self.feedback != Feedback::Wrong {
            return Err(self.rejected(QuizEvent::Retry));
        }
        self.feedback = Feedback::None;
        Ok(Transition::default())
    }

    /// Leave the reward interlude for the next question, or finish.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Rejected` outside the reward interlude.
    pub fn advance(&mut self) -> Result<Transition, QuizError> {
        self.expect_state(QuizEvent::Advance, QuizState::Reward)?;
        let mut transition = Transition::default();
        self.disarm(&mut transition);
        self.step_forward(&mut transition);
        Ok(transition)
    }

    /// Abandon the session from any state.
    pub fn quit(&mut self) -> Transition {
        let mut transition = Transition::default();
        self.disarm(&mut transition);
        self.clear();
        transition
    }

    /// Apply a fired timer. Returns `None` when `token` is stale.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> Option<Transition> {
        let armed = self.armed.filter(|armed| armed.token == token)?;
        self.armed = None;

        let mut transition = Transition::default();
        match armed.kind {
            TimerKind::RevealReward => self.enter_reward(&mut transition),
            TimerKind::AutoAdvance => self.step_forward(&mut transition),
        }
        Some(transition)
    }

    fn enter_reward(&mut self, transition: &mut Transition) {
        self.reward_active = true;
        self.arm(
            TimerKind::AutoAdvance,
            self.timing.reward_duration,
            transition,
        );
    }

    fn step_forward(&mut self, transition: &mut Transition) {
        let Some(session) = self.session else {
            return;
        };
        let len = self.catalog.sequence(session.subject).len();
        if session.index + 1 < len {
            self.session = Some(Session {
                subject: session.subject,
                index: session.index + 1,
            });
            self.feedback = Feedback::None;
            self.reward_active = false;
        } else {
            self.clear();
            transition.finished = true;
        }
    }

    fn clear(&mut self) {
        self.session = None;
        self.feedback = Feedback::None;
        self.reward_active = false;
    }

    fn arm(&mut self, kind: TimerKind, after: Duration, transition: &mut Transition) {
        self.disarm(transition);
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.armed = Some(ArmedTimer { token, kind });
        transition
            .effects
            .push(Effect::Schedule { token, kind, after });
    }

    fn disarm(&mut self, transition: &mut Transition) {
        if let Some(armed) = self.armed.take() {
            transition.effects.push(Effect::Cancel {
                token: armed.token,
            });
        }
    }

    fn expect_state(&self, event: QuizEvent, expected: QuizState) -> Result<(), QuizError> {
        if self.state() == expected {
            Ok(())
        } else {
            Err(self.rejected(event))
        }
    }

    fn rejected(&self, event: QuizEvent) -> QuizError {
        QuizError::Rejected {
            event,
            state: self.state(),
        }
    }
}
