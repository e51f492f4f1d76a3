//! # jobmatch matcher
//!
//! Scores job postings against candidate profiles. One similarity primitive
//! (set Jaccard) backs two operations:
//!
//! - [`jaccard`] — direct similarity between two skill lists, returned as a
//!   fraction in `[0.0, 1.0]`.
//! - [`MatchScorer::match_score`] — job-to-candidate score combining
//!   bag-of-words Jaccard over the job's and candidate's full text with a
//!   flat bonus per exact (verbatim, case-sensitive) skill overlap.
//!
//! The canonical score scale everywhere in this crate is the fraction;
//! [`MatchScorer::match_percent`] converts to the `[0, 100]` integer used on
//! the wire by ranked job listings, clamping before it scales.
//!
//! ## Ranking
//!
//! [`MatchScorer::rank_jobs`] scores a whole job list against one candidate
//! and sorts descending by score with a stable sort, so equal scores keep
//! the caller's order (creation time descending upstream).
//!
//! ## Concurrency
//!
//! Everything here is a pure synchronous function over immutable
//! configuration. Scorers are `Send + Sync` and shared behind `Arc` across
//! request handlers without any locking.
//!
//! ## Example
//!
//! ```rust
//! use matcher::{jaccard, CandidateProfile, JobPosting, MatchScorer};
//!
//! let score = jaccard(&["react", "node", "tailwind"], &["react", "node", "mongo", "aws"]);
//! assert!((score - 0.4).abs() < 1e-9);
//!
//! let scorer = MatchScorer::default();
//! let job = JobPosting {
//!     title: "FE Dev".into(),
//!     description: "React developer".into(),
//!     skills: vec!["react".into(), "node".into()],
//!     company: None,
//! };
//! let user = CandidateProfile {
//!     bio: "I build react apps".into(),
//!     skills: vec!["react".into()],
//! };
//! assert_eq!(scorer.match_percent(&job, &user), 27);
//! ```

mod metrics;
mod scorer;
mod types;

pub use crate::metrics::{set_rank_metrics, RankMetrics};
pub use crate::scorer::{jaccard, MatchScorer, ScorerConfig};
pub use crate::types::{CandidateProfile, JobPosting, RankedJob, ScorerError};
