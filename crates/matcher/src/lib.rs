//! # APEX.SPHERE Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns a free-text query into a ranked list of catalog items. It
//! is a pure, synchronous pass over an immutable catalog snapshot supplied by
//! the caller: no I/O, no shared mutable state, and no failure modes on
//! well-formed input.
//!
//! The pipeline has three steps:
//! - [`extract_keywords`]: lowercase, split on anything that is not a word
//!   character, drop multilingual stop words and tokens of two characters or
//!   fewer.
//! - [`score_item`]: weighted substring matching over names, category,
//!   colors, tags and descriptions.
//! - [`search`]: drop zero scores, stable-sort descending, truncate.
//!
//! ## Scoring
//!
//! | Field        | Weight | Counted                                   |
//! |--------------|--------|-------------------------------------------|
//! | name         | 3.0    | per (translation, keyword) hit            |
//! | category     | 2.5    | once if any keyword hits                  |
//! | colors       | 2.0    | per color value hit by any keyword        |
//! | tags         | 1.5    | per tag value hit by any keyword          |
//! | description  | 1.0    | per (translation, keyword) hit            |
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Catalog;
//! use matcher::{search, DEFAULT_LIMIT};
//!
//! let catalog = Catalog::sample();
//! let hits = search("black jeans for tall people", &catalog, DEFAULT_LIMIT);
//! assert_eq!(hits[0].item.id, 1);
//! assert_eq!(hits[0].match_score, 20.0);
//! ```
//!
//! ## Observability
//!
//! Install a [`SearchMetrics`] implementation via [`set_search_metrics`] to
//! record per-search latency and hit counts for calls made through
//! [`Matcher`].

pub mod engine;
pub mod keywords;
pub mod metrics;
pub mod scoring;
pub mod types;

pub use crate::engine::{search, search_default, Matcher};
pub use crate::keywords::{extract_keywords, MIN_KEYWORD_CHARS, STOP_WORDS};
pub use crate::metrics::{set_search_metrics, SearchMetrics};
pub use crate::scoring::{
    score_breakdown, score_item, CATEGORY_WEIGHT, COLOR_WEIGHT, DESCRIPTION_WEIGHT, NAME_WEIGHT,
    TAG_WEIGHT,
};
pub use crate::types::{
    KeywordSet, MatchError, MatcherConfig, ScoreBreakdown, ScoredResult, SearchOptions,
    DEFAULT_LIMIT,
};
