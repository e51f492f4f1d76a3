//! Keyword-based skill extraction for jobmatch.
//!
//! This crate scans free text (job descriptions, candidate bios, arbitrary
//! input) against a fixed [`SkillVocabulary`] and returns the distinct
//! tokens found. There is no NLP here on purpose: a fixed vocabulary trades
//! recall for zero external dependencies and fully deterministic output.
//!
//! ## Matching policies
//!
//! Two [`MatchPolicy`] variants exist because their behavior genuinely
//! differs on short tokens:
//!
//! - [`MatchPolicy::WholeWord`] compiles one `\b`-delimited pattern per
//!   token. `going` does not match `go`.
//! - [`MatchPolicy::Substring`] uses plain containment. `going` matches
//!   `go`.
//!
//! ## Pure function guarantee
//!
//! Extraction performs no I/O and holds no mutable state; an extractor can
//! be built once and shared across threads. Empty input produces an empty
//! result rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use extract::{MatchPolicy, SkillExtractor, SkillVocabulary};
//!
//! let vocab = SkillVocabulary::new(["react", "node", "aws"]).unwrap();
//! let extractor = SkillExtractor::new(vocab, MatchPolicy::WholeWord);
//! assert_eq!(extractor.extract("React and AWS, no frontend"), ["react", "aws"]);
//! ```

mod builtin;
mod error;
mod extractor;
mod vocabulary;

pub use crate::error::VocabularyError;
pub use crate::extractor::{MatchPolicy, SkillExtractor};
pub use crate::vocabulary::SkillVocabulary;
