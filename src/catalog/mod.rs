//! Catalog of guessable characters.
//!
//! The catalog is the session's only input collaborator: an ordered, fixed
//! list that the session samples by index. Entries are validated once, up
//! front, and every problem is reported together rather than one at a time.
//!
//! # Example
//!
//! ```rust
//! use strawhat::catalog::{Catalog, Character};
//!
//! let catalog = Catalog::new(vec![
//!     Character::new("Luffy", "Wants to be Pirate King"),
//!     Character::new("Zoro", "Wants to be world's greatest swordsman"),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get(1).map(|c| c.name()), Some("Zoro"));
//! ```

mod builtin;
pub mod error;

pub use error::{CatalogError, CatalogIssue};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A guessable character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    hint: String,
}

impl Character {
    pub fn new(name: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hint: hint.into(),
        }
    }

    /// Full name; may contain spaces.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// Validated, non-empty list of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    characters: Vec<Character>,
}

#[derive(Deserialize)]
struct CatalogFile {
    characters: Vec<Character>,
}

impl Catalog {
    /// Build a catalog, rejecting it if it is empty or any entry is invalid.
    ///
    /// Hints must be unique: a session tracks which hints it has already
    /// shown, so two entries sharing a hint would be indistinguishable.
    pub fn new(characters: Vec<Character>) -> Result<Self, CatalogError> {
        if characters.is_empty() {
            return Err(CatalogError::Empty);
        }

        match validate(&characters) {
            Validation::Success(_) => Ok(Self { characters }),
            Validation::Failure(issues) => Err(CatalogError::Invalid(
                issues.iter().cloned().collect(),
            )),
        }
    }

    /// The Straw Hat crew.
    pub fn builtin() -> Self {
        Self {
            characters: builtin::characters(),
        }
    }

    /// Parse a TOML catalog made of `[[characters]]` tables.
    ///
    /// ```toml
    /// [[characters]]
    /// name = "Monkey D. Luffy"
    /// hint = "Wants to be Pirate King"
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.characters)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), characters = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always `false` for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }
}

/// Check every entry, accumulating all issues instead of stopping at the first.
fn validate(characters: &[Character]) -> Validation<(), NonEmptyVec<CatalogIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<CatalogIssue>>> = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, character) in characters.iter().enumerate() {
        if character.name.trim().is_empty() {
            checks.push(Validation::fail(CatalogIssue::BlankName { index }));
        }

        let hint = character.hint.trim();
        if hint.is_empty() {
            checks.push(Validation::fail(CatalogIssue::BlankHint { index }));
            continue;
        }

        match seen.get(hint) {
            Some(&first) => {
                checks.push(Validation::fail(CatalogIssue::DuplicateHint { index, first }));
            }
            None => {
                seen.insert(hint, index);
                checks.push(Validation::success(()));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luffy() -> Character {
        Character::new("Luffy", "Wants to be Pirate King")
    }

    fn zoro() -> Character {
        Character::new("Zoro", "Wants to be world's greatest swordsman")
    }

    #[test]
    fn valid_catalog_keeps_order() {
        let catalog = Catalog::new(vec![luffy(), zoro()]).unwrap();

        let names: Vec<_> = catalog.iter().map(Character::name).collect();
        assert_eq!(names, vec!["Luffy", "Zoro"]);
        assert!(!catalog.is_empty());
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = Catalog::new(Vec::new());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn validation_reports_every_issue() {
        let result = Catalog::new(vec![
            luffy(),
            Character::new("  ", "Cooks for the crew"),
            Character::new("Nami", ""),
            Character::new("Luffy again", "Wants to be Pirate King"),
        ]);

        match result {
            Err(CatalogError::Invalid(issues)) => {
                assert_eq!(
                    issues,
                    vec![
                        CatalogIssue::BlankName { index: 1 },
                        CatalogIssue::BlankHint { index: 2 },
                        CatalogIssue::DuplicateHint { index: 3, first: 0 },
                    ]
                );
            }
            other => panic!("Expected invalid catalog, got {other:?}"),
        }
    }

    #[test]
    fn invalid_error_lists_issues() {
        let err = Catalog::new(vec![Character::new("", "hint")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Catalog has invalid entries: entry 0 has a blank name"
        );
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let revalidated = Catalog::new(builtin.iter().cloned().collect()).unwrap();

        assert_eq!(builtin, revalidated);
        assert!(builtin.iter().any(|c| c.name().contains("Luffy")));
    }

    #[test]
    fn parses_toml_catalog() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[characters]]
            name = "Luffy"
            hint = "Wants to be Pirate King"

            [[characters]]
            name = "Zoro"
            hint = "Wants to be world's greatest swordsman"
            "#,
        )
        .unwrap();

        assert_eq!(catalog, Catalog::new(vec![luffy(), zoro()]).unwrap());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Catalog::from_toml_str("[[characters]]\nname = 3");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = Catalog::load(Path::new("/definitely/not/here/catalog.toml"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
