//! Workspace umbrella crate for APEX.SPHERE product search.
//!
//! This crate re-exports the catalog and matcher layers so callers can search
//! a catalog snapshot through a single dependency. The HTTP API lives in the
//! `apex-server` crate.
//!
//! ```
//! use apex_sphere::{Catalog, search, DEFAULT_LIMIT};
//!
//! let catalog = Catalog::sample();
//! let hits = search("premium hoodie", &catalog, DEFAULT_LIMIT);
//! assert_eq!(hits[0].item.id, 2);
//! ```

pub use catalog::{Catalog, CatalogError, CatalogItem, LocalizedText};
pub use matcher::{
    CATEGORY_WEIGHT, COLOR_WEIGHT, DEFAULT_LIMIT, DESCRIPTION_WEIGHT, KeywordSet, MatchError,
    Matcher, MatcherConfig, NAME_WEIGHT, STOP_WORDS, ScoreBreakdown, ScoredResult, SearchMetrics,
    SearchOptions, TAG_WEIGHT, extract_keywords, score_breakdown, score_item, search,
    search_default, set_search_metrics,
};
