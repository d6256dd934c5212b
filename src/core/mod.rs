//! Core session types.
//!
//! - Phases via the `State` trait
//! - Immutable history of phase transitions
//!
//! Everything in this module is pure; no timers, I/O or randomness.

mod history;
mod state;

pub use history::{StateHistory, StateTransition, TransitionReason};
pub use state::{Phase, State};
