// Metrics hooks for the matcher.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`]; every call through [`Matcher::search`] then reports
// its latency, keyword count and hit count. This keeps instrumentation
// decoupled from any specific metrics backend.
//
// [`Matcher::search`]: crate::Matcher::search
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of one search.
    ///
    /// `keyword_count` is the number of keywords extracted from the query and
    /// `hit_count` the number of results returned after truncation.
    fn record_search(&self, latency: Duration, keyword_count: usize, hit_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// Typically called once during service startup.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
