//! Strawhat: a guess-the-character trivia session engine
//!
//! The player is shown a hint describing a character and must guess the name
//! before the clock runs out. The game is a single state machine,
//! [`GuessSession`], kept free of timers and I/O; the [`driver`] module wraps
//! it in an event loop with a cancellable one-second ticker.
//!
//! # Core Concepts
//!
//! - **Catalog**: validated list of characters to guess
//! - **Session**: score, clock, hint history and outcome message
//! - **Phase**: `Active` or `Expired`, with a recorded transition history
//! - **Driver**: single event queue feeding ticks and player intents
//!
//! # Example
//!
//! ```rust
//! use strawhat::builder::SessionBuilder;
//! use strawhat::catalog::{Catalog, Character};
//! use strawhat::core::Phase;
//!
//! let catalog = Catalog::new(vec![
//!     Character::new("Luffy", "Wants to be Pirate King"),
//!     Character::new("Zoro", "Wants to be world's greatest swordsman"),
//! ])
//! .unwrap();
//!
//! let mut session = SessionBuilder::new().catalog(catalog).seed(1).build().unwrap();
//! session.start_or_refresh_hint();
//!
//! let outcome = session.submit_guess("zz");
//! assert!(!outcome.is_correct());
//! assert_eq!(session.score(), 0);
//!
//! for _ in 0..60 {
//!     session.tick();
//! }
//! assert_eq!(session.phase(), Phase::Expired);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod driver;
pub mod session;

// Re-export commonly used types
pub use builder::{BuildError, SessionBuilder};
pub use catalog::{Catalog, Character};
pub use crate::core::{Phase, State};
pub use session::{GuessOutcome, GuessSession, SessionSnapshot};
