//! Read-only view of a session.

use crate::core::Phase;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a view layer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Identifies the current playthrough; changes on restart
    pub session_id: Uuid,
    pub phase: Phase,
    /// Rendered hint text, empty before the first hint
    pub hint: String,
    /// Rounds won
    pub score: u32,
    pub time_remaining: u32,
    pub guess_text: String,
    /// Transient outcome message, empty when there is nothing to report
    pub message: String,
    /// Guesses submitted in this playthrough, including rejected ones
    pub submissions: u32,
    /// Hints presented so far in this playthrough
    pub hints_shown: usize,
    pub catalog_size: usize,
}

impl SessionSnapshot {
    /// All hints in the catalog have been presented.
    pub fn catalog_exhausted(&self) -> bool {
        self.hints_shown >= self.catalog_size
    }
}
