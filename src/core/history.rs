//! Phase transition history.
//!
//! Every time a session changes phase (expiry, restart) a record is appended
//! here. The history outlives individual playthroughs, so a restarted session
//! still knows how its previous rounds ended.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why a session changed phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionReason {
    /// The countdown reached zero.
    TimerElapsed,
    /// No character with an unseen hint is left.
    CatalogExhausted,
    /// The player asked for a fresh playthrough.
    Restarted,
}

/// Record of a single phase transition.
///
/// # Example
///
/// ```rust
/// use strawhat::core::{Phase, StateTransition, TransitionReason};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Active,
///     to: Phase::Expired,
///     timestamp: Utc::now(),
///     reason: TransitionReason::TimerElapsed,
/// };
/// assert_eq!(transition.reason, TransitionReason::TimerElapsed);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// What caused it
    pub reason: TransitionReason,
}

/// Ordered history of phase transitions.
///
/// History is immutable: [`record`](Self::record) returns a new history with
/// the transition appended.
///
/// # Example
///
/// ```rust
/// use strawhat::core::{Phase, StateHistory, StateTransition, TransitionReason};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Active,
///         to: Phase::Expired,
///         timestamp: Utc::now(),
///         reason: TransitionReason::TimerElapsed,
///     })
///     .record(StateTransition {
///         from: Phase::Expired,
///         to: Phase::Active,
///         timestamp: Utc::now(),
///         reason: TransitionReason::Restarted,
///     });
///
/// assert_eq!(history.get_path(), vec![&Phase::Active, &Phase::Expired, &Phase::Active]);
/// assert_eq!(history.count(TransitionReason::Restarted), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the `to`
    /// state of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of transitions caused by `reason`.
    pub fn count(&self, reason: TransitionReason) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.reason == reason)
            .count()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn transition(from: Phase, to: Phase, reason: TransitionReason) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            reason,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let next = history.record(transition(
            Phase::Active,
            Phase::Expired,
            TransitionReason::TimerElapsed,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
    }

    #[test]
    fn path_follows_expiry_and_restart() {
        let history = StateHistory::new()
            .record(transition(
                Phase::Active,
                Phase::Expired,
                TransitionReason::CatalogExhausted,
            ))
            .record(transition(
                Phase::Expired,
                Phase::Active,
                TransitionReason::Restarted,
            ));

        let path = history.get_path();
        assert_eq!(path, vec![&Phase::Active, &Phase::Expired, &Phase::Active]);
        assert_eq!(
            history.last().map(|t| t.reason),
            Some(TransitionReason::Restarted)
        );
    }

    #[test]
    fn count_filters_by_reason() {
        let history = StateHistory::new()
            .record(transition(
                Phase::Active,
                Phase::Expired,
                TransitionReason::TimerElapsed,
            ))
            .record(transition(
                Phase::Expired,
                Phase::Active,
                TransitionReason::Restarted,
            ))
            .record(transition(
                Phase::Active,
                Phase::Expired,
                TransitionReason::TimerElapsed,
            ));

        assert_eq!(history.count(TransitionReason::TimerElapsed), 2);
        assert_eq!(history.count(TransitionReason::Restarted), 1);
        assert_eq!(history.count(TransitionReason::CatalogExhausted), 0);
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record(transition(
            Phase::Active,
            Phase::Expired,
            TransitionReason::TimerElapsed,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(
            Phase::Active,
            Phase::Expired,
            TransitionReason::TimerElapsed,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.transitions().len(), 1);
        assert_eq!(restored.transitions()[0].to, Phase::Expired);
    }
}
