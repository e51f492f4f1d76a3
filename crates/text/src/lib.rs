//! Text normalization helpers shared by the extraction and scoring layers.
//!
//! Everything in this crate is a pure function over `&str`: no I/O, no clock
//! calls, no locale dependence. Same input, same output, on any machine.
//!
//! - [`normalize_skill`] folds a single skill token into its canonical form
//!   (trimmed, lowercase).
//! - [`word_bag`] turns free text into a lowercase bag-of-words set with a
//!   minimum token length.
//! - [`collapse_whitespace`] squeezes runs of Unicode whitespace into single
//!   ASCII spaces.

use std::collections::HashSet;

/// Canonical form of a single skill token: trimmed and lowercased.
///
/// Skill comparison throughout the workspace is case-insensitive, which is
/// implemented by folding both sides through this function rather than by
/// carrying case-insensitive comparators around.
pub fn normalize_skill(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Builds a lowercase bag-of-words from free text.
///
/// The text is lowercased and split on Unicode whitespace; tokens shorter
/// than `min_chars` characters are dropped. The result is a set, so word
/// order and repetition do not matter.
///
/// # Examples
///
/// ```rust
/// use text::word_bag;
///
/// let bag = word_bag("React developer, we use React daily", 3);
/// assert!(bag.contains("react"));
/// assert!(bag.contains("developer,"));
/// // "we" has fewer than 3 characters and is dropped.
/// assert!(!bag.contains("we"));
/// ```
pub fn word_bag(text: &str, min_chars: usize) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
