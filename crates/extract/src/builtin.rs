//! Built-in skill vocabularies.
//!
//! Two vocabularies ship with the crate, serving two different callers:
//!
//! - [`curated`]: languages, frameworks, cloud and blockchain terms, matched
//!   as whole words. Whole-word matching avoids false positives such as
//!   finding `go` inside `going`, at the cost of missing tokens glued to
//!   punctuation.
//! - [`broad`]: a wider net matched by substring containment. Recall is
//!   higher but so is the false-positive rate, notably for single-letter
//!   tokens like `c`.
//!
//! Callers that need different token lists build their own
//! [`SkillVocabulary`] and [`SkillExtractor`]; nothing here is global state.

use crate::extractor::{MatchPolicy, SkillExtractor};
use crate::vocabulary::SkillVocabulary;

const CURATED_SKILLS: [&str; 49] = [
    "javascript",
    "typescript",
    "react",
    "node",
    "express",
    "mongo",
    "mongodb",
    "postgres",
    "sql",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "html",
    "css",
    "tailwind",
    "nextjs",
    "vite",
    "redux",
    "python",
    "java",
    "c++",
    "go",
    "rust",
    "nestjs",
    "graphql",
    "rest",
    "fastapi",
    "flask",
    "django",
    "ml",
    "ai",
    "nlp",
    "pytorch",
    "tensorflow",
    "sklearn",
    "linux",
    "git",
    "solidity",
    "ethers",
    "web3",
    "metamask",
    "solana",
    "phantom",
    "redis",
    "rabbitmq",
    "kafka",
    "microservices",
];

const BROAD_SKILLS: [&str; 49] = [
    "c",
    "c++",
    "java",
    "python",
    "javascript",
    "react",
    "node",
    "express",
    "mongodb",
    "sql",
    "html",
    "css",
    "tailwind",
    "aws",
    "docker",
    "kubernetes",
    "linux",
    "tensorflow",
    "pytorch",
    "nlp",
    "opencv",
    "flutter",
    "dart",
    "solidity",
    "web3",
    "git",
    "github",
    "jenkins",
    "spark",
    "hadoop",
    "typescript",
    "vue",
    "angular",
    "next",
    "nuxt",
    "graphql",
    "redis",
    "postgresql",
    "mysql",
    "firebase",
    "heroku",
    "vercel",
    "netlify",
    "gcp",
    "azure",
    "terraform",
    "ansible",
    "gitlab",
    "bitbucket",
];

impl SkillVocabulary {
    /// The curated vocabulary used with whole-word matching.
    pub fn curated() -> Self {
        Self::new(CURATED_SKILLS).expect("built-in vocabulary is valid")
    }

    /// The broad vocabulary used with substring matching.
    pub fn broad() -> Self {
        Self::new(BROAD_SKILLS).expect("built-in vocabulary is valid")
    }
}

impl SkillExtractor {
    /// Extractor over the curated vocabulary with whole-word matching.
    pub fn curated() -> Self {
        Self::new(SkillVocabulary::curated(), MatchPolicy::WholeWord)
    }

    /// Extractor over the broad vocabulary with substring matching.
    pub fn broad() -> Self {
        Self::new(SkillVocabulary::broad(), MatchPolicy::Substring)
    }
}
