//! Workspace umbrella crate for jobmatch.
//!
//! This crate stitches together skill extraction and match scoring so
//! callers can work with job postings and candidate profiles through a
//! single API entry point. The member crates remain usable on their own:
//!
//! - [`extract`] — vocabulary-based skill extraction from free text
//! - [`matcher`] — Jaccard scoring, exact-skill bonus, ranked listings
//! - [`text`] — shared normalization and bag-of-words helpers

pub use extract::{MatchPolicy, SkillExtractor, SkillVocabulary, VocabularyError};
pub use matcher::{
    jaccard, set_rank_metrics, CandidateProfile, JobPosting, MatchScorer, RankMetrics, RankedJob,
    ScorerConfig, ScorerError,
};
pub use text::{collapse_whitespace, normalize_skill, word_bag};

/// Builds a candidate profile from free-form bio text.
///
/// The skills list is seeded from the bio using the broad built-in
/// extractor, mirroring what the profile editor suggests to a user who has
/// not picked skills by hand.
pub fn profile_from_bio(bio: impl Into<String>) -> CandidateProfile {
    let bio = bio.into();
    let skills = SkillExtractor::broad().extract(&bio);
    CandidateProfile { bio, skills }
}

/// Scores and sorts a job list for one candidate using the default scorer
/// configuration.
///
/// Equivalent to building a [`MatchScorer`] with [`ScorerConfig::default`]
/// and calling [`MatchScorer::rank_jobs`]; jobs with equal scores keep
/// their input order.
pub fn rank_for_candidate(user: &CandidateProfile, jobs: Vec<JobPosting>) -> Vec<RankedJob> {
    MatchScorer::default().rank_jobs(user, jobs)
}
