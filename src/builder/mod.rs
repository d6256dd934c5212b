//! Fluent construction of guess sessions.
//!
//! # Example
//!
//! ```rust
//! use strawhat::builder::SessionBuilder;
//! use strawhat::catalog::Catalog;
//! use strawhat::session::ExhaustionPolicy;
//!
//! let session = SessionBuilder::new()
//!     .catalog(Catalog::builtin())
//!     .time_budget(30)
//!     .exhaustion(ExhaustionPolicy::LastHintShown)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(session.time_remaining(), 30);
//! ```

pub mod error;

pub use error::BuildError;

use crate::catalog::Catalog;
use crate::session::{ExhaustionPolicy, GuessSession, DEFAULT_TIME_BUDGET_SECS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builder for [`GuessSession`].
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    catalog: Option<Catalog>,
    time_budget: u32,
    policy: ExhaustionPolicy,
    seed: Option<u64>,
}

impl SessionBuilder {
    /// Create a new builder with the default 60 second budget.
    pub fn new() -> Self {
        Self {
            catalog: None,
            time_budget: DEFAULT_TIME_BUDGET_SECS,
            policy: ExhaustionPolicy::default(),
            seed: None,
        }
    }

    /// Set the catalog (required).
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seconds on the clock for each playthrough.
    pub fn time_budget(mut self, seconds: u32) -> Self {
        self.time_budget = seconds;
        self
    }

    pub fn exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Seed hint selection for a reproducible sequence.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session with a seeded or entropy-backed `StdRng`.
    pub fn build(self) -> Result<GuessSession, BuildError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_rng(rng)
    }

    /// Build the session around a caller-supplied random source.
    ///
    /// Any seed set on the builder is ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<GuessSession<R>, BuildError> {
        let catalog = self.catalog.ok_or(BuildError::MissingCatalog)?;

        if self.time_budget == 0 {
            return Err(BuildError::ZeroTimeBudget);
        }

        // a lone character would expire every playthrough on its first hint
        if self.policy == ExhaustionPolicy::LastHintShown && catalog.len() < 2 {
            return Err(BuildError::CatalogTooSmall(catalog.len()));
        }

        tracing::debug!(
            characters = catalog.len(),
            time_budget = self.time_budget,
            policy = ?self.policy,
            "building session"
        );
        Ok(GuessSession::new(
            catalog,
            rng,
            self.time_budget,
            self.policy,
        ))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
