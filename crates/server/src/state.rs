use crate::config::ServerConfig;
use crate::error::ServerResult;
use dashmap::DashMap;
use extract::SkillExtractor;
use matcher::MatchScorer;
use std::sync::Arc;

/// Shared application state
///
/// The extractors and the scorer are pure and hold no mutable state, so one
/// instance of each is built at startup and shared across all request
/// handlers without locking.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: API key -> (count, window_start)
    pub rate_limiter: Arc<DashMap<String, (u32, std::time::Instant)>>,

    /// Whole-word extractor over the curated vocabulary
    pub curated_extractor: Arc<SkillExtractor>,

    /// Substring extractor over the broad vocabulary
    pub broad_extractor: Arc<SkillExtractor>,

    /// Match scorer (shared across requests)
    pub scorer: Arc<MatchScorer>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let scorer = Arc::new(MatchScorer::new(Default::default())?);

        Ok(Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            curated_extractor: Arc::new(SkillExtractor::curated()),
            broad_extractor: Arc::new(SkillExtractor::broad()),
            scorer,
        })
    }

    /// Check if API key is valid
    pub fn is_valid_api_key(&self, key: &str) -> bool {
        self.config.api_keys.contains(key)
    }

    /// Check rate limit for API key
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(key.to_string()).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}
