//! Vocabulary-driven skill extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::vocabulary::SkillVocabulary;

/// How a vocabulary token is matched against the input text.
///
/// The two policies behave differently on short tokens: whole-word matching
/// will not find `go` inside `going`, substring containment will. Both are
/// kept as named variants because both behaviors are depended on by
/// different callers; pick deliberately.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Token must appear as a whole word (`\b`-delimited regex match).
    WholeWord,
    /// Token must appear as a plain substring of the text.
    Substring,
}

/// Scans free text against a fixed vocabulary and returns the distinct
/// tokens found, case-insensitively.
///
/// The vocabulary is injected at construction and immutable afterwards;
/// whole-word patterns are compiled once up front. Extraction itself is a
/// pure, total function: any input (including the empty string) produces a
/// result, and the extractor can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    policy: MatchPolicy,
    // One compiled pattern per vocabulary token; empty under Substring.
    patterns: Vec<Regex>,
}

impl SkillExtractor {
    /// Builds an extractor for the given vocabulary and matching policy.
    pub fn new(vocabulary: SkillVocabulary, policy: MatchPolicy) -> Self {
        let patterns = match policy {
            MatchPolicy::WholeWord => vocabulary
                .iter()
                .map(|token| {
                    // Tokens like "c++" carry regex metacharacters and must
                    // be escaped before the pattern is compiled.
                    let escaped = regex::escape(token);
                    Regex::new(&format!(r"\b{escaped}\b"))
                        .expect("escaped vocabulary token always compiles")
                })
                .collect(),
            MatchPolicy::Substring => Vec::new(),
        };

        Self {
            vocabulary,
            policy,
            patterns,
        }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Returns the vocabulary tokens present in `input`, in vocabulary
    /// order, lowercase, deduplicated.
    ///
    /// Empty input yields an empty vec. No error conditions exist.
    pub fn extract(&self, input: &str) -> Vec<String> {
        let lower = input.to_lowercase();
        match self.policy {
            MatchPolicy::WholeWord => self
                .vocabulary
                .iter()
                .zip(&self.patterns)
                .filter(|(_, pattern)| pattern.is_match(&lower))
                .map(|(token, _)| token.to_string())
                .collect(),
            MatchPolicy::Substring => self
                .vocabulary
                .iter()
                .filter(|token| lower.contains(*token))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(tokens: &[&str]) -> SkillVocabulary {
        SkillVocabulary::new(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn whole_word_ignores_embedded_tokens() {
        let extractor = SkillExtractor::new(vocab(&["go", "rust"]), MatchPolicy::WholeWord);
        assert_eq!(extractor.extract("we are going to learn rust"), ["rust"]);
        assert_eq!(extractor.extract("go is great"), ["go"]);
    }

    #[test]
    fn substring_finds_embedded_tokens() {
        let extractor = SkillExtractor::new(vocab(&["go", "rust"]), MatchPolicy::Substring);
        assert_eq!(extractor.extract("we are going to learn rust"), ["go", "rust"]);
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let extractor = SkillExtractor::new(vocab(&["react", "node"]), MatchPolicy::WholeWord);
        assert_eq!(extractor.extract("REACT and Node"), ["react", "node"]);
    }

    #[test]
    fn results_follow_vocabulary_order() {
        let extractor = SkillExtractor::new(vocab(&["aws", "node", "react"]), MatchPolicy::WholeWord);
        assert_eq!(
            extractor.extract("react first, then node, then aws"),
            ["aws", "node", "react"]
        );
    }

    #[test]
    fn metacharacter_tokens_are_escaped_not_interpreted() {
        let extractor = SkillExtractor::new(vocab(&["c++"]), MatchPolicy::WholeWord);
        // "cpp" would match if "+" were treated as a quantifier.
        assert!(extractor.extract("cpp and ccc").is_empty());
    }

    #[test]
    fn metacharacter_tokens_match_under_substring_policy() {
        let extractor = SkillExtractor::new(vocab(&["c++"]), MatchPolicy::Substring);
        assert_eq!(extractor.extract("modern C++ codebase"), ["c++"]);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let extractor = SkillExtractor::new(vocab(&["react"]), MatchPolicy::WholeWord);
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn repeated_occurrences_deduplicate() {
        let extractor = SkillExtractor::new(vocab(&["react"]), MatchPolicy::Substring);
        assert_eq!(extractor.extract("react react react"), ["react"]);
    }
}
