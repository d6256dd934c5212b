//! Session phases and the trait they implement.
//!
//! A guess session only ever sits in one of two phases. The trait keeps the
//! phase inspectable (name for logs, finality for the driver) without the
//! caller matching on variants.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for session states.
///
/// All methods are pure. States are small values that describe where the
/// session currently is; they are recorded in [`StateHistory`] and carried in
/// snapshots, so they must be cloneable and serializable.
///
/// [`StateHistory`]: super::StateHistory
///
/// # Example
///
/// ```rust
/// use strawhat::core::{Phase, State};
///
/// assert_eq!(Phase::Active.name(), "Active");
/// assert!(!Phase::Active.is_final());
/// assert!(Phase::Expired.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// A terminal session accepts no further ticks or guesses until it is
    /// restarted.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Phase of a guess session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Hints are being shown and guesses accepted.
    #[default]
    Active,
    /// The timer ran out or the catalog was exhausted.
    Expired,
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Expired)
    }
}
