//! Game configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) gives the standard 60 second game over the built-in
//! catalog.
//!
//! ```toml
//! time_budget_secs = 90
//! tick_interval_ms = 1000
//! seed = 7
//! catalog = "crew.toml"
//! exhaustion = "last_hint_shown"
//! ```

use crate::builder::SessionBuilder;
use crate::catalog::{Catalog, CatalogError};
use crate::session::{ExhaustionPolicy, DEFAULT_TIME_BUDGET_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("tick_interval_ms must be greater than zero")]
    ZeroTickInterval,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock for each playthrough
    pub time_budget_secs: u32,
    /// Length of one clock second, in milliseconds
    pub tick_interval_ms: u64,
    /// Fixed seed for hint selection
    pub seed: Option<u64>,
    /// TOML catalog to use instead of the built-in crew
    pub catalog: Option<PathBuf>,
    pub exhaustion: ExhaustionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            catalog: None,
            exhaustion: ExhaustionPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        if config.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The configured catalog file, or the built-in crew.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Session builder carrying every setting from this config.
    pub fn session_builder(&self) -> Result<SessionBuilder, CatalogError> {
        let mut builder = SessionBuilder::new()
            .catalog(self.load_catalog()?)
            .time_budget(self.time_budget_secs)
            .exhaustion(self.exhaustion);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        Ok(builder)
    }
}
