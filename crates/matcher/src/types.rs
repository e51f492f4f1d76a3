use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job posting as seen by the scorer.
///
/// Only the fields the scoring formula reads are modeled. All fields default
/// to empty when absent on the wire, so a record with a missing `bio` or
/// `skills` scores cleanly instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// A candidate profile as seen by the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CandidateProfile {
    pub bio: String,
    pub skills: Vec<String>,
}

/// A job with its match score attached, as produced by ranking.
///
/// Serializes the job fields inline plus a `matchScore` percentage, matching
/// the wire format job listings are consumed in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Errors produced by the scoring layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScorerError {
    /// Invalid scorer configuration.
    #[error("invalid scorer config: {0}")]
    InvalidConfig(String),
}
