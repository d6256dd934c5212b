//! Lenient name matching.

/// Check a guess against a character's full name.
///
/// The guess is trimmed and lowercased; the name is split on whitespace and
/// each token lowercased. The guess matches when any single token contains it
/// as a substring, so `"luf"` matches `"Monkey D. Luffy"` but `"y d"` does
/// not. A blank guess never matches.
///
/// ```rust
/// use strawhat::session::name_matches;
///
/// assert!(name_matches("Monkey D. Luffy", "LUF"));
/// assert!(name_matches("Roronoa Zoro", "  oro "));
/// assert!(!name_matches("Roronoa Zoro", "roronoa zoro"));
/// ```
pub fn name_matches(name: &str, guess: &str) -> bool {
    let guess = guess.trim().to_lowercase();
    if guess.is_empty() {
        return false;
    }
    name.split_whitespace()
        .any(|token| token.to_lowercase().contains(&guess))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_a_token_matches() {
        assert!(name_matches("Luffy", "luf"));
    }

    #[test]
    fn matching_ignores_case_and_outer_whitespace() {
        assert!(name_matches("Nico Robin", "  ROB  "));
        assert!(name_matches("nico robin", "Nico"));
    }

    #[test]
    fn any_token_can_match() {
        assert!(name_matches("Tony Tony Chopper", "chop"));
        assert!(name_matches("Tony Tony Chopper", "ony"));
    }

    #[test]
    fn guess_spanning_tokens_does_not_match() {
        assert!(!name_matches("Nico Robin", "nico robin"));
        assert!(!name_matches("Nico Robin", "o r"));
    }

    #[test]
    fn unrelated_guess_does_not_match() {
        assert!(!name_matches("Zoro", "zz"));
        assert!(!name_matches("Luffy", "luffyy"));
    }

    #[test]
    fn blank_guess_never_matches() {
        assert!(!name_matches("Luffy", ""));
        assert!(!name_matches("Luffy", "   "));
    }
}
