use std::time::Instant;

use catalog::CatalogItem;

use crate::keywords::extract_keywords;
use crate::metrics::metrics_recorder;
use crate::scoring::score_breakdown;
use crate::types::{
    KeywordSet, MatchError, MatcherConfig, ScoredResult, SearchOptions, DEFAULT_LIMIT,
};


/// Rank `catalog` against `query` and return at most `limit` results.
///
/// Items that score zero are dropped. Results are ordered by score descending;
/// equal scores keep their catalog order. A query that yields no keywords
/// returns an empty list. This function never fails.
pub fn search(query: &str, catalog: &[CatalogItem], limit: usize) -> Vec<ScoredResult> {
    let keywords = extract_keywords(query);
    rank(&keywords, catalog, limit, false)
}

/// [`search`] with the default limit.
pub fn search_default(query: &str, catalog: &[CatalogItem]) -> Vec<ScoredResult> {
    search(query, catalog, DEFAULT_LIMIT)
}

fn rank(
    keywords: &KeywordSet,
    catalog: &[CatalogItem],
    limit: usize,
    explain: bool,
) -> Vec<ScoredResult> {
    if keywords.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredResult> = catalog
        .iter()
        .filter_map(|item| {
            let breakdown = score_breakdown(item, keywords);
            let score = breakdown.total();
            (score > 0.0).then(|| ScoredResult {
                item: item.clone(),
                match_score: score,
                match_keywords: keywords.clone(),
                breakdown: explain.then_some(breakdown),
            })
        })
        .collect();

    // `sort_by` is stable, so ties stay in catalog order.
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(limit);
    scored
}

/// Search front-end that applies configured limits and reports metrics.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Construct a matcher, validating `config`.
    pub fn new(config: MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Effective result count for a requested limit.
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit)
    }

    /// Rank `catalog` against `query` using `options`.
    pub fn search(
        &self,
        query: &str,
        catalog: &[CatalogItem],
        options: SearchOptions,
    ) -> Vec<ScoredResult> {
        let start = Instant::now();
        let limit = self.resolve_limit(options.limit);
        let keywords = extract_keywords(query);
        let results = rank(&keywords, catalog, limit, options.explain);

        tracing::debug!(
            keywords = ?keywords.as_slice(),
            limit,
            candidates = catalog.len(),
            hits = results.len(),
            "Search ranked"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_search(start.elapsed(), keywords.len(), results.len());
        }

        results
    }
}
