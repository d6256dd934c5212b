//! The guess session state machine.
//!
//! A session owns all game state and changes only through its operations:
//! [`start_or_refresh_hint`], [`submit_guess`], [`tick`] and [`restart`].
//! It never schedules anything itself; whoever drives it decides when a
//! second has elapsed and calls [`tick`].
//!
//! [`start_or_refresh_hint`]: GuessSession::start_or_refresh_hint
//! [`submit_guess`]: GuessSession::submit_guess
//! [`tick`]: GuessSession::tick
//! [`restart`]: GuessSession::restart
//!
//! # Example
//!
//! ```rust
//! use strawhat::builder::SessionBuilder;
//! use strawhat::catalog::{Catalog, Character};
//! use strawhat::core::Phase;
//!
//! let catalog = Catalog::new(vec![Character::new("Luffy", "Wants to be Pirate King")]).unwrap();
//! let mut session = SessionBuilder::new().catalog(catalog).seed(7).build().unwrap();
//!
//! session.start_or_refresh_hint();
//! assert_eq!(session.hint(), "Hint: Wants to be Pirate King");
//!
//! let outcome = session.submit_guess("luf");
//! assert!(outcome.is_correct());
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.phase(), Phase::Expired); // nothing left to guess
//! ```

mod matcher;
mod outcome;
mod snapshot;

pub use matcher::name_matches;
pub use outcome::{
    GuessOutcome, MSG_CORRECT, MSG_EMPTY_GUESS, MSG_NO_HINT, MSG_SESSION_OVER, MSG_WRONG,
};
pub use snapshot::SessionSnapshot;

use crate::catalog::{Catalog, Character};
use crate::core::{Phase, State, StateHistory, StateTransition, TransitionReason};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

/// Seconds on the clock at the start of a playthrough.
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 60;

/// When running out of unseen hints ends the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionPolicy {
    /// Expire when a new hint is needed and none is left. The final
    /// character can still be guessed.
    #[default]
    NoHintsLeft,
    /// Expire as soon as the last unseen hint is shown.
    LastHintShown,
}

/// State and rules of one guessing game.
pub struct GuessSession<R = StdRng> {
    id: Uuid,
    catalog: Catalog,
    rng: R,
    policy: ExhaustionPolicy,
    time_budget: u32,

    active: Option<usize>,
    hint: String,
    hint_displayed: bool,
    hints_shown: HashSet<String>,
    score: u32,
    time_remaining: u32,
    guess_text: String,
    message: String,
    submissions: u32,
    phase: Phase,
    history: StateHistory<Phase>,
}

impl<R: Rng> GuessSession<R> {
    /// Create a session in its initial state: active, full clock, no hint yet.
    ///
    /// Prefer [`SessionBuilder`](crate::builder::SessionBuilder), which
    /// validates the time budget and rejects [`ExhaustionPolicy::LastHintShown`]
    /// for single-character catalogs.
    pub fn new(catalog: Catalog, rng: R, time_budget: u32, policy: ExhaustionPolicy) -> Self {
        Self {
            id: Uuid::new_v4(),
            catalog,
            rng,
            policy,
            time_budget,
            active: None,
            hint: String::new(),
            hint_displayed: false,
            hints_shown: HashSet::new(),
            score: 0,
            time_remaining: time_budget,
            guess_text: String::new(),
            message: String::new(),
            submissions: 0,
            phase: Phase::Active,
            history: StateHistory::new(),
        }
    }

    /// Show a hint for a character whose hint has not been shown yet.
    ///
    /// Does nothing once the session has expired. Sampling is uniform over
    /// the characters still eligible, so it always terminates. Running out
    /// of eligible characters expires the session according to the
    /// [`ExhaustionPolicy`].
    ///
    /// Returns the newly active character, or `None` if no hint was shown.
    pub fn start_or_refresh_hint(&mut self) -> Option<&Character> {
        if self.phase.is_final() {
            return None;
        }

        let eligible: Vec<usize> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, character)| !self.hints_shown.contains(character.hint()))
            .map(|(index, _)| index)
            .collect();

        let Some(&index) = eligible.choose(&mut self.rng) else {
            self.expire(TransitionReason::CatalogExhausted);
            return None;
        };

        let hint = self.catalog.get(index)?.hint().to_string();
        self.hint = format!("Hint: {hint}");
        self.hints_shown.insert(hint);
        self.active = Some(index);
        self.hint_displayed = true;
        self.message.clear();

        debug!(
            session = %self.id,
            index,
            shown = self.hints_shown.len(),
            remaining = eligible.len() - 1,
            "hint shown"
        );

        if self.policy == ExhaustionPolicy::LastHintShown && eligible.len() == 1 {
            self.expire(TransitionReason::CatalogExhausted);
        }

        self.active_character()
    }

    /// Check a guess against the active character.
    ///
    /// A correct guess scores a point and moves straight on to the next
    /// hint. The outcome message is stored on the session and the guess text
    /// is cleared whatever the result.
    pub fn submit_guess(&mut self, raw_input: &str) -> GuessOutcome {
        let outcome = self.evaluate(raw_input);

        if outcome.is_correct() {
            self.score += 1;
            self.hint_displayed = false;
            self.start_or_refresh_hint();
        }

        self.message = outcome.message().to_string();
        self.guess_text.clear();
        self.submissions += 1;

        info!(
            session = %self.id,
            outcome = outcome.label(),
            score = self.score,
            "guess submitted"
        );
        outcome
    }

    /// Submit whatever the player has typed so far.
    pub fn submit_current_guess(&mut self) -> GuessOutcome {
        let guess = std::mem::take(&mut self.guess_text);
        self.submit_guess(&guess)
    }

    /// Replace the pending guess text.
    pub fn set_guess_text(&mut self, text: impl Into<String>) {
        self.guess_text = text.into();
    }

    /// Advance the clock by one second.
    ///
    /// Has no effect once expired. Returns the phase after the tick.
    pub fn tick(&mut self) -> Phase {
        if self.phase.is_final() {
            return self.phase;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.expire(TransitionReason::TimerElapsed);
        }
        self.phase
    }

    /// Reset every field to its initial value and show a fresh hint.
    ///
    /// The playthrough gets a new id; the phase history is kept.
    pub fn restart(&mut self) {
        let from = self.phase;

        self.id = Uuid::new_v4();
        self.active = None;
        self.hint.clear();
        self.hint_displayed = false;
        self.hints_shown.clear();
        self.score = 0;
        self.time_remaining = self.time_budget;
        self.guess_text.clear();
        self.message.clear();
        self.submissions = 0;
        self.phase = Phase::Active;
        self.record(from, TransitionReason::Restarted);

        info!(session = %self.id, from = from.name(), "session restarted");
        self.start_or_refresh_hint();
    }

    fn evaluate(&self, raw_input: &str) -> GuessOutcome {
        if self.phase.is_final() {
            return GuessOutcome::SessionOver;
        }
        let Some(character) = self.active_character() else {
            return GuessOutcome::NoHint;
        };
        if raw_input.trim().is_empty() {
            return GuessOutcome::EmptyGuess;
        }
        if name_matches(character.name(), raw_input) {
            GuessOutcome::Correct {
                name: character.name().to_string(),
            }
        } else {
            GuessOutcome::Wrong
        }
    }

    fn expire(&mut self, reason: TransitionReason) {
        if self.phase.is_final() {
            return;
        }
        self.phase = Phase::Expired;
        self.record(Phase::Active, reason);
        info!(
            session = %self.id,
            ?reason,
            score = self.score,
            time_remaining = self.time_remaining,
            "session expired"
        );
    }

    fn record(&mut self, from: Phase, reason: TransitionReason) {
        self.history = self.history.record(StateTransition {
            from,
            to: self.phase,
            timestamp: Utc::now(),
            reason,
        });
    }
}

impl<R> GuessSession<R> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_character(&self) -> Option<&Character> {
        self.active.and_then(|index| self.catalog.get(index))
    }

    /// Rendered hint text (`"Hint: ..."`), empty before the first hint.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn hint_displayed(&self) -> bool {
        self.hint_displayed
    }

    pub fn hints_shown(&self) -> usize {
        self.hints_shown.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn time_budget(&self) -> u32 {
        self.time_budget
    }

    pub fn guess_text(&self) -> &str {
        &self.guess_text
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    pub fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            phase: self.phase,
            hint: self.hint.clone(),
            score: self.score,
            time_remaining: self.time_remaining,
            guess_text: self.guess_text.clone(),
            message: self.message.clone(),
            submissions: self.submissions,
            hints_shown: self.hints_shown.len(),
            catalog_size: self.catalog.len(),
        }
    }
}
