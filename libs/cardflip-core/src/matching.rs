//! Answer matching for typed guesses.
//!
//! A guess is accepted when, after normalization, it equals the reference,
//! one contains the other, or the two are within [`MAX_TYPO_DISTANCE`]
//! edits of each other. An empty guess never matches.

use serde::{Deserialize, Serialize};

/// Largest Levenshtein distance still accepted as a typo.
pub const MAX_TYPO_DISTANCE: usize = 2;

/// Which rule accepted (or rejected) a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchKind {
    /// Normalized strings are identical.
    Exact,
    /// One normalized string contains the other.
    Contains,
    /// Within the typo tolerance.
    Typo { distance: usize },
    NoMatch,
}

/// Result of grading a guess against a reference answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the guess is considered correct.
    pub is_correct: bool,
    pub kind: MatchKind,
    /// Normalized guess (for display).
    pub guess_normalized: String,
    /// Normalized reference answer (for display).
    pub reference_normalized: String,
}

/// Lowercase `text`, collapse every run of characters outside `[a-z0-9]`
/// into a single space, and trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Calculate Levenshtein distance between two strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Grade `guess` against `reference`, reporting which rule decided.
pub fn grade(guess: &str, reference: &str) -> MatchResult {
    let guess_normalized = normalize(guess);
    let reference_normalized = normalize(reference);

    let kind = classify(&guess_normalized, &reference_normalized);

    MatchResult {
        is_correct: !matches!(kind, MatchKind::NoMatch),
        kind,
        guess_normalized,
        reference_normalized,
    }
}

/// Whether `guess` is close enough to `reference` to count as correct.
pub fn is_close_match(guess: &str, reference: &str) -> bool {
    grade(guess, reference).is_correct
}

fn classify(guess: &str, reference: &str) -> MatchKind {
    // Empty strings are contained in everything; reject them first.
    if guess.is_empty() || reference.is_empty() {
        return MatchKind::NoMatch;
    }
    if guess == reference {
        return MatchKind::Exact;
    }
    if guess.contains(reference) || reference.contains(guess) {
        return MatchKind::Contains;
    }

    let distance = edit_distance(guess, reference);
    if distance <= MAX_TYPO_DISTANCE {
        MatchKind::Typo { distance }
    } else {
        MatchKind::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("React Hooks!!"), "react hooks");
        assert_eq!(normalize("  npm m ProjectCLI,ExpoCLI "), "npm m projectcli expocli");
        assert_eq!(normalize("useEffect()  side-effect"), "useeffect side effect");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_treats_non_ascii_as_separator() {
        assert_eq!(normalize("café au lait"), "caf au lait");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["Virtual DOM tree", "  a--b__c  ", "Read-only component inputs", "ÀB c"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
            assert!(once
                .chars()
                .all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit()));
            assert!(!once.contains("  "));
            assert_eq!(once.trim(), once);
        }
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_edit_distance_symmetric() {
        let pairs = [("kitten", "sitting"), ("mutbale", "mutable"), ("", "x"), ("flaw", "lawn")];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!is_close_match("", "anything"));
        assert!(!is_close_match("anything", ""));
        assert!(!is_close_match("?!", "anything"));
        assert!(!is_close_match("", ""));
    }

    #[test]
    fn test_case_and_punctuation() {
        let result = grade("React Hooks", "react hooks!!");
        assert!(result.is_correct);
        assert_eq!(result.kind, MatchKind::Exact);
    }

    #[test]
    fn test_containment() {
        let result = grade("virtual dom", "Virtual DOM tree");
        assert!(result.is_correct);
        assert_eq!(result.kind, MatchKind::Contains);

        // Guess may also contain the reference.
        assert!(is_close_match("it is the virtual dom tree", "Virtual DOM tree"));
    }

    #[test]
    fn test_typo_tolerance() {
        let result = grade("mutbale component state", "Mutable component state");
        assert!(result.is_correct);
        assert_eq!(result.kind, MatchKind::Typo { distance: 2 });

        assert!(!is_close_match("completely different", "mutable component state"));
    }

    #[test]
    fn test_short_guess_with_typos_too_far() {
        // Neither contains the other and the distance is well past the limit.
        let result = grade("mutbale state", "mutable component state");
        assert!(!result.is_correct);
        assert_eq!(result.kind, MatchKind::NoMatch);
    }

    #[test]
    fn test_three_edits_rejected() {
        assert!(!is_close_match("kitten", "sitting"));
        assert!(is_close_match("webpak", "webpack"));
    }
}
