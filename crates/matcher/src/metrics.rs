// Metrics hooks for the scoring layer.
//
// Callers install a global `RankMetrics` implementation via
// [`set_rank_metrics`]; `MatchScorer::rank_jobs` then reports per-call
// latency and job counts. This keeps instrumentation decoupled from any
// specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for ranking operations.
pub trait RankMetrics: Send + Sync {
    /// Record one ranking pass: wall-clock duration and number of jobs scored.
    fn record_rank(&self, latency: Duration, job_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn RankMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn RankMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn RankMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global ranking metrics recorder.
///
/// Typically called once during service startup so every scorer shares the
/// same metrics backend.
pub fn set_rank_metrics(recorder: Option<Arc<dyn RankMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("rank metrics lock poisoned");
    *guard = recorder;
}
