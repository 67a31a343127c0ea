use catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 5;

/// Normalized query keywords in first-occurrence order, without duplicates.
///
/// Serialized as a JSON array of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut keywords: Vec<String> = Vec::new();
        for keyword in iter {
            let keyword = keyword.into();
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        Self(keywords)
    }
}

/// Per-field contributions to an item's relevance score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub name: f64,
    pub category: f64,
    pub colors: f64,
    pub tags: f64,
    pub description: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.name + self.category + self.colors + self.tags + self.description
    }
}

/// A catalog item that matched a query.
///
/// The item's fields are flattened into the JSON object next to
/// `match_score` and `match_keywords`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Relevance score, always greater than zero for returned results.
    pub match_score: f64,
    /// Keywords the score was computed from.
    pub match_keywords: KeywordSet,
    /// Per-field contributions, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Per-call search knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results; `None` uses the matcher's default.
    pub limit: Option<usize>,
    /// Attach a [`ScoreBreakdown`] to each result.
    pub explain: bool,
}

/// Limits applied by [`Matcher`](crate::Matcher).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Result count used when a request does not specify one.
    #[serde(default = "MatcherConfig::default_limit")]
    pub default_limit: usize,
    /// Hard ceiling on the result count of a single request.
    #[serde(default = "MatcherConfig::default_max_limit")]
    pub max_limit: usize,
}

impl MatcherConfig {
    pub(crate) fn default_limit() -> usize {
        DEFAULT_LIMIT
    }

    pub(crate) fn default_max_limit() -> usize {
        50
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.default_limit == 0 {
            return Err(MatchError::InvalidConfig(
                "default_limit must be greater than zero".into(),
            ));
        }
        if self.default_limit > self.max_limit {
            return Err(MatchError::InvalidConfig(format!(
                "default_limit ({}) must not exceed max_limit ({})",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            default_limit: Self::default_limit(),
            max_limit: Self::default_max_limit(),
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid matcher config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_set_dedupes_in_order() {
        let set: KeywordSet = ["jeans", "black", "jeans"].into_iter().collect();
        assert_eq!(set.as_slice(), ["jeans", "black"]);
        assert!(set.contains("black"));
        assert!(!set.contains("blue"));
    }

    #[test]
    fn keyword_set_serializes_as_array() {
        let set: KeywordSet = ["tall", "people"].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            serde_json::json!(["tall", "people"])
        );
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = MatcherConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.default_limit, DEFAULT_LIMIT);
    }

    #[test]
    fn zero_default_limit_rejected() {
        let cfg = MatcherConfig {
            default_limit: 0,
            ..MatcherConfig::default()
        };
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("default_limit")),
        }
    }

    #[test]
    fn default_above_max_rejected() {
        let cfg = MatcherConfig {
            default_limit: 10,
            max_limit: 3,
        };
        match cfg.validate().expect_err("config should be invalid") {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_limit")),
        }
    }

    #[test]
    fn scored_result_flattens_item() {
        let item = catalog::Catalog::sample()[0].clone();
        let result = ScoredResult {
            item,
            match_score: 4.5,
            match_keywords: ["jeans"].into_iter().collect(),
            breakdown: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "jeans");
        assert_eq!(json["match_score"], 4.5);
        assert_eq!(json["match_keywords"], serde_json::json!(["jeans"]));
        assert!(json.get("breakdown").is_none());
        assert!(json.get("item").is_none());
    }
}
