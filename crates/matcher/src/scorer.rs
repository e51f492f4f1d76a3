//! The match scoring engine.
//!
//! One similarity primitive (set Jaccard) backs two operations: a direct
//! score between two skill lists, and a job-to-candidate score that combines
//! whole-text token overlap with a flat bonus for exact skill overlap.

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use text::{normalize_skill, word_bag};

use crate::metrics::metrics_recorder;
use crate::types::{CandidateProfile, JobPosting, RankedJob, ScorerError};

/// Jaccard similarity between two skill lists.
///
/// Both lists are folded to lowercase before comparison; order and
/// duplicates are irrelevant. Returns `|A ∩ B| / |A ∪ B|` as a fraction in
/// `[0.0, 1.0]`, and `0.0` when both lists are empty. The result is
/// symmetric in its arguments.
pub fn jaccard<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let a: HashSet<String> = a.iter().map(|s| normalize_skill(s.as_ref())).collect();
    let b: HashSet<String> = b.iter().map(|s| normalize_skill(s.as_ref())).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// Tuning knobs for the job-to-candidate score.
///
/// Cheap to clone and serde-friendly so it can live in service configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorerConfig {
    /// Minimum token length (in characters) for the bag-of-words; shorter
    /// tokens carry little signal and are dropped.
    #[serde(default = "ScorerConfig::default_min_token_chars")]
    pub min_token_chars: usize,
    /// Score added per job skill found verbatim in the candidate's skills.
    /// The bonus is only bounded jointly with the Jaccard term: the summed
    /// fraction is clamped to 1.0 before any conversion to a percentage.
    #[serde(default = "ScorerConfig::default_exact_skill_bonus")]
    pub exact_skill_bonus: f64,
}

impl ScorerConfig {
    pub(crate) fn default_min_token_chars() -> usize {
        3
    }

    pub(crate) fn default_exact_skill_bonus() -> f64 {
        0.1
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.min_token_chars == 0 {
            return Err(ScorerError::InvalidConfig(
                "min_token_chars must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.exact_skill_bonus) {
            return Err(ScorerError::InvalidConfig(
                "exact_skill_bonus must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_token_chars: Self::default_min_token_chars(),
            exact_skill_bonus: Self::default_exact_skill_bonus(),
        }
    }
}

/// Scores job postings against candidate profiles.
///
/// Stateless apart from its immutable configuration: every method is a pure
/// synchronous function, safe to call concurrently from any number of
/// request handlers without coordination.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    cfg: ScorerConfig,
}

impl MatchScorer {
    /// Builds a scorer with an explicit, validated configuration.
    pub fn new(cfg: ScorerConfig) -> Result<Self, ScorerError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.cfg
    }

    fn job_bag(&self, job: &JobPosting) -> HashSet<String> {
        let combined = format!("{} {} {}", job.description, job.skills.join(" "), job.title);
        word_bag(&combined, self.cfg.min_token_chars)
    }

    fn candidate_bag(&self, user: &CandidateProfile) -> HashSet<String> {
        let combined = format!("{} {}", user.bio, user.skills.join(" "));
        word_bag(&combined, self.cfg.min_token_chars)
    }

    /// Job-to-candidate match score as a fraction in `[0.0, 1.0]`.
    ///
    /// Jaccard similarity between the job's and the candidate's bag-of-words,
    /// plus [`ScorerConfig::exact_skill_bonus`] per job skill present
    /// verbatim (case-sensitive) in the candidate's skill list. The sum is
    /// clamped to 1.0.
    pub fn match_score(&self, job: &JobPosting, user: &CandidateProfile) -> f64 {
        let job_words = self.job_bag(job);
        let user_words = self.candidate_bag(user);

        let union = job_words.union(&user_words).count();
        let similarity = if union == 0 {
            0.0
        } else {
            job_words.intersection(&user_words).count() as f64 / union as f64
        };

        let exact_matches = job
            .skills
            .iter()
            .filter(|skill| user.skills.contains(skill))
            .count();
        let bonus = exact_matches as f64 * self.cfg.exact_skill_bonus;

        (similarity + bonus).min(1.0)
    }

    /// Job-to-candidate match score as a percentage integer in `[0, 100]`.
    ///
    /// The clamp happens on the fraction, before scaling, so the result
    /// never exceeds 100.
    pub fn match_percent(&self, job: &JobPosting, user: &CandidateProfile) -> u8 {
        (self.match_score(job, user) * 100.0).round() as u8
    }

    /// Scores every job against one candidate and sorts descending by score.
    ///
    /// The sort is stable: jobs with equal scores keep their input order,
    /// which upstream callers provide as creation time descending.
    pub fn rank_jobs(&self, user: &CandidateProfile, jobs: Vec<JobPosting>) -> Vec<RankedJob> {
        let start = Instant::now();
        let mut ranked: Vec<RankedJob> = jobs
            .into_iter()
            .map(|job| RankedJob {
                match_score: self.match_percent(&job, user),
                job,
            })
            .collect();
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            jobs = ranked.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ranked jobs for candidate"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_rank(start.elapsed(), ranked.len());
        }

        ranked
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self {
            cfg: ScorerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(description: &str, skills: &[&str], title: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            description: description.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            company: None,
        }
    }

    fn user(bio: &str, skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            bio: bio.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn jaccard_two_skill_lists() {
        let score = jaccard(
            &["react", "node", "tailwind"],
            &["react", "node", "mongo", "aws"],
        );
        // intersection {react, node} = 2, union = 5
        assert!((score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn jaccard_is_symmetric() {
        let a = ["react", "node", "tailwind"];
        let b = ["react", "aws"];
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn jaccard_empty_union_is_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn jaccard_folds_case() {
        assert!((jaccard(&["React"], &["react"]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn match_score_combines_overlap_and_bonus() {
        let scorer = MatchScorer::default();
        let job = job("React developer", &["react", "node"], "FE Dev");
        let user = user("I build react apps", &["react"]);

        // job bag: {react, developer, node, dev}; user bag: {build, react, apps}
        // intersection = {react}, union has 6 members; one exact skill match.
        let expected = 1.0 / 6.0 + 0.1;
        assert!((scorer.match_score(&job, &user) - expected).abs() < 1e-9);
        assert_eq!(scorer.match_percent(&job, &user), 27);
    }

    #[test]
    fn exact_skill_bonus_is_case_sensitive() {
        let scorer = MatchScorer::default();
        let lower = user("", &["react"]);
        let upper = user("", &["React"]);
        let posting = job("frontend role", &["react"], "");

        // The bag-of-words overlap is identical; only the verbatim skill
        // comparison distinguishes the two candidates.
        assert!(scorer.match_score(&posting, &lower) > scorer.match_score(&posting, &upper));
    }

    #[test]
    fn empty_candidate_scores_zero() {
        let scorer = MatchScorer::default();
        let posting = job("Senior Rust engineer", &["rust", "tokio"], "Backend");
        assert_eq!(scorer.match_percent(&posting, &user("", &[])), 0);
    }

    #[test]
    fn score_is_clamped_before_scaling() {
        let scorer = MatchScorer::default();
        // Eleven exact skill matches alone already exceed a 1.0 fraction.
        let skills: Vec<String> = (0..11).map(|i| format!("skill-{i}")).collect();
        let posting = JobPosting {
            title: String::new(),
            description: String::new(),
            skills: skills.clone(),
            company: None,
        };
        let candidate = CandidateProfile {
            bio: String::new(),
            skills,
        };
        assert!((scorer.match_score(&posting, &candidate) - 1.0).abs() < 1e-9);
        assert_eq!(scorer.match_percent(&posting, &candidate), 100);
    }

    #[test]
    fn adding_matching_skill_never_decreases_score() {
        let scorer = MatchScorer::default();
        let candidate = user("I ship backend services", &["rust", "redis"]);
        let before = job("Backend role", &["rust"], "Backend");
        let mut after = before.clone();
        after.skills.push("redis".to_string());

        assert!(scorer.match_score(&after, &candidate) >= scorer.match_score(&before, &candidate));
    }

    #[test]
    fn rank_jobs_sorts_descending_with_stable_ties() {
        let scorer = MatchScorer::default();
        let candidate = user("rust developer writing rust services", &["rust"]);

        let strong = job("rust rust rust", &["rust"], "Rust");
        let weak = job("haskell position", &["haskell"], "FP");
        let also_weak = job("ocaml position", &["ocaml"], "FP");

        let ranked = scorer.rank_jobs(
            &candidate,
            vec![weak.clone(), strong.clone(), also_weak.clone()],
        );

        assert_eq!(ranked[0].job, strong);
        // Both zero-score jobs keep their input order.
        assert_eq!(ranked[1].job, weak);
        assert_eq!(ranked[2].job, also_weak);
        assert_eq!(ranked[1].match_score, 0);
        assert_eq!(ranked[2].match_score, 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = MatchScorer::new(ScorerConfig {
            min_token_chars: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScorerError::InvalidConfig(_)));

        let err = MatchScorer::new(ScorerConfig {
            exact_skill_bonus: 1.5,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ScorerError::InvalidConfig(_)));
    }

    #[test]
    fn ranked_job_serializes_flat_with_match_score() {
        let ranked = RankedJob {
            job: job("Build UIs", &["react"], "Frontend"),
            match_score: 42,
        };
        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["title"], "Frontend");
        assert_eq!(value["matchScore"], 42);
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let user: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(user.bio.is_empty());
        assert!(user.skills.is_empty());

        let job: JobPosting = serde_json::from_str(r#"{"title":"Dev"}"#).unwrap();
        assert!(job.description.is_empty());
        assert!(job.skills.is_empty());

        let scorer = MatchScorer::default();
        assert_eq!(scorer.match_percent(&job, &user), 0);
    }
}
