//! Skill vocabulary: the fixed token list an extractor scans for.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use text::normalize_skill;

use crate::error::VocabularyError;

/// An ordered set of canonical skill tokens, fixed at construction.
///
/// Tokens are folded to lowercase and deduplicated (first occurrence wins),
/// so iteration order is the insertion order of each distinct token. The
/// vocabulary is immutable once built; extractors take it by value and never
/// modify it, which keeps extraction free of shared mutable state.
///
/// Serializes as a plain token list; deserialization goes through
/// [`SkillVocabulary::new`] so the lowercase/dedup/non-blank invariants hold
/// for vocabularies loaded from configuration too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct SkillVocabulary {
    tokens: Vec<String>,
}

impl From<SkillVocabulary> for Vec<String> {
    fn from(vocab: SkillVocabulary) -> Self {
        vocab.tokens
    }
}

impl TryFrom<Vec<String>> for SkillVocabulary {
    type Error = VocabularyError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(tokens)
    }
}

impl SkillVocabulary {
    /// Builds a vocabulary from an ordered token list.
    ///
    /// Empty or whitespace-only tokens are rejected; an empty list is
    /// rejected. Duplicates (after case folding) collapse to the first
    /// occurrence.
    pub fn new<I, S>(tokens: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut any_input = false;

        for (position, raw) in tokens.into_iter().enumerate() {
            any_input = true;
            let token = normalize_skill(raw.as_ref());
            if token.is_empty() {
                return Err(VocabularyError::BlankToken(position));
            }
            if seen.insert(token.clone()) {
                out.push(token);
            }
        }

        if !any_input {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { tokens: out })
    }

    /// Tokens in canonical (lowercase) form, in insertion order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
