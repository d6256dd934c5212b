//! Catalog error types.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Name is empty or only whitespace
    BlankName { index: usize },

    /// Hint is empty or only whitespace
    BlankHint { index: usize },

    /// Hint text already used by an earlier entry
    DuplicateHint { index: usize, first: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName { index } => write!(f, "entry {index} has a blank name"),
            Self::BlankHint { index } => write!(f, "entry {index} has a blank hint"),
            Self::DuplicateHint { index, first } => {
                write!(f, "entry {index} repeats the hint of entry {first}")
            }
        }
    }
}

/// Errors that can occur when building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is empty. Add at least one character")]
    Empty,

    #[error("Catalog has invalid entries: {}", join_issues(.0))]
    Invalid(Vec<CatalogIssue>),

    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

fn join_issues(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
