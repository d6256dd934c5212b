//! Results of submitting a guess.

use serde::{Deserialize, Serialize};

pub const MSG_NO_HINT: &str = "Please generate a hint first.";
pub const MSG_EMPTY_GUESS: &str = "Please enter a guess.";
pub const MSG_CORRECT: &str = "Congratulations! You guessed the character!";
pub const MSG_WRONG: &str = "Sorry! Wrong guess. Try again.";
pub const MSG_SESSION_OVER: &str = "The game is over. Restart to play again.";

/// What happened to a submitted guess.
///
/// `NoHint`, `EmptyGuess` and `SessionOver` are informational: the session
/// reports them to the player and otherwise leaves its state alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess matched; carries the name that was guessed.
    Correct { name: String },
    Wrong,
    NoHint,
    EmptyGuess,
    SessionOver,
}

impl GuessOutcome {
    /// User-facing message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Correct { .. } => MSG_CORRECT,
            Self::Wrong => MSG_WRONG,
            Self::NoHint => MSG_NO_HINT,
            Self::EmptyGuess => MSG_EMPTY_GUESS,
            Self::SessionOver => MSG_SESSION_OVER,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Correct { .. } => "correct",
            Self::Wrong => "wrong",
            Self::NoHint => "no_hint",
            Self::EmptyGuess => "empty_guess",
            Self::SessionOver => "session_over",
        }
    }
}
