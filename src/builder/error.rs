//! Build errors for the session builder.

use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Catalog not specified. Call .catalog(catalog) before .build()")]
    MissingCatalog,

    #[error("Time budget must be at least one second")]
    ZeroTimeBudget,

    #[error("Exhaustion policy last_hint_shown needs at least two characters, catalog has {0}")]
    CatalogTooSmall(usize),
}
