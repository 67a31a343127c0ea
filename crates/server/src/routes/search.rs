use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use catalog::LocalizedText;
use matcher::{ScoredResult, SearchOptions};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Language echoed back when the request does not name one.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Search request
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; required and non-empty
    #[serde(default)]
    pub query: Option<String>,

    /// UI language; echoed back, not used for scoring
    #[serde(default)]
    pub language: Option<String>,

    /// Maximum results to return; defaults to the configured limit
    #[serde(default)]
    pub limit: Option<usize>,

    /// Attach per-field score contributions to each result
    #[serde(default)]
    pub explain: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub language: String,
    pub results_count: usize,
    pub results: Vec<ScoredResult>,
    pub suggestions: LocalizedText,
}

/// Query hints shown alongside every result list.
pub fn search_suggestions() -> LocalizedText {
    [
        (
            "de",
            "Versuche spezifischere Begriffe wie 'schwarze Jeans für große Menschen'",
        ),
        (
            "en",
            "Try more specific terms like 'black jeans for tall people'",
        ),
        (
            "uk",
            "Спробуй більш конкретні терміни як 'чорні джинси для високих'",
        ),
        (
            "ru",
            "Попробуй более конкретные термины как 'черные джинсы для высоких'",
        ),
    ]
    .into_iter()
    .collect()
}

/// Search the catalog.
///
/// Keywords are extracted from `query` and matched against item names,
/// categories, colors, tags and descriptions. A query made only of stop words
/// or punctuation is valid and returns an empty list.
pub async fn search_products(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> ServerResult<Json<SearchResponse>> {
    let query = request
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ServerError::BadRequest("Query is required".to_string()))?;

    if request.limit == Some(0) {
        return Err(ServerError::BadRequest(
            "limit must be greater than zero".to_string(),
        ));
    }

    let language = request
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    let results = state.matcher.search(
        &query,
        &state.catalog,
        SearchOptions {
            limit: request.limit,
            explain: request.explain,
        },
    );

    tracing::info!(
        query = %query,
        language = %language,
        results = results.len(),
        "Search completed"
    );

    Ok(Json(SearchResponse {
        query,
        language,
        results_count: results.len(),
        results,
        suggestions: search_suggestions(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_are_optional() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert!(request.query.is_none());
        assert!(request.language.is_none());
        assert!(request.limit.is_none());
        assert!(!request.explain);
    }

    #[test]
    fn suggestions_cover_all_languages() {
        let suggestions = search_suggestions();
        let langs: Vec<&str> = suggestions.languages().collect();
        assert_eq!(langs, vec!["de", "en", "ru", "uk"]);
    }
}
