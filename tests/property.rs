//! Property-based tests using proptest.
//!
//! These tests verify that the scoring and extraction invariants hold for
//! randomly generated inputs, not just the hand-picked cases in the unit
//! tests.

use proptest::prelude::*;

use jobmatch::{
    jaccard, CandidateProfile, JobPosting, MatchPolicy, MatchScorer, SkillExtractor,
    SkillVocabulary,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

/// Generate random skill lists.
fn skills_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..8)
}

/// Generate random free text (multiple words, mixed case).
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[a-zA-Z0-9+,.]{1,10}").unwrap(),
        0..16,
    )
    .prop_map(|words| words.join(" "))
}

fn job_strategy() -> impl Strategy<Value = JobPosting> {
    (text_strategy(), skills_strategy(), word_strategy()).prop_map(
        |(description, skills, title)| JobPosting {
            title,
            description,
            skills,
            company: None,
        },
    )
}

fn user_strategy() -> impl Strategy<Value = CandidateProfile> {
    (text_strategy(), skills_strategy())
        .prop_map(|(bio, skills)| CandidateProfile { bio, skills })
}

fn extractor_strategy() -> impl Strategy<Value = SkillExtractor> {
    prop_oneof![
        Just(SkillExtractor::curated()),
        Just(SkillExtractor::broad()),
    ]
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn jaccard_is_symmetric(a in skills_strategy(), b in skills_strategy()) {
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }

    #[test]
    fn jaccard_stays_in_unit_interval(a in skills_strategy(), b in skills_strategy()) {
        let score = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn match_score_stays_in_unit_interval(job in job_strategy(), user in user_strategy()) {
        let scorer = MatchScorer::default();
        let score = scorer.match_score(&job, &user);
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(scorer.match_percent(&job, &user) <= 100);
    }

    #[test]
    fn adding_verbatim_skill_never_decreases_score(
        job in job_strategy(),
        user in user_strategy(),
    ) {
        prop_assume!(!user.skills.is_empty());
        let scorer = MatchScorer::default();
        let before = scorer.match_score(&job, &user);

        let mut boosted = job.clone();
        boosted.skills.push(user.skills[0].clone());
        let after = scorer.match_score(&boosted, &user);

        prop_assert!(after >= before - 1e-12);
    }

    #[test]
    fn re_extraction_never_grows_the_set(text in text_strategy(), extractor in extractor_strategy()) {
        let first = extractor.extract(&text);
        let again = extractor.extract(&first.join(" "));
        for skill in &again {
            prop_assert!(first.contains(skill), "re-extraction surfaced {skill}");
        }
    }

    #[test]
    fn extraction_is_case_insensitive(text in text_strategy(), extractor in extractor_strategy()) {
        prop_assert_eq!(extractor.extract(&text.to_uppercase()), extractor.extract(&text));
    }

    #[test]
    fn ranking_is_sorted_descending(
        user in user_strategy(),
        jobs in prop::collection::vec(job_strategy(), 0..10),
    ) {
        let ranked = MatchScorer::default().rank_jobs(&user, jobs);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn custom_vocabulary_extraction_only_returns_vocabulary_tokens(
        tokens in prop::collection::hash_set("[a-z]{2,6}", 1..10),
        text in text_strategy(),
    ) {
        let vocab = SkillVocabulary::new(tokens.iter().cloned()).unwrap();
        let extractor = SkillExtractor::new(vocab.clone(), MatchPolicy::WholeWord);
        for skill in extractor.extract(&text) {
            prop_assert!(vocab.tokens().contains(&skill));
        }
    }
}
