use crate::error::ServerResult;
use crate::extract::ApiJson;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use catalog::{CatalogItem, LocalizedText};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Number of catalog items returned as recommendations.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Recommendation request
#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    /// User preferences; accepted but not yet used for ranking
    #[serde(default)]
    pub preferences: Map<String, Value>,
}

/// A recommended item with its mock reasoning
#[derive(Debug, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub recommendation_reason: LocalizedText,
    /// Percentage, 0..=100
    pub confidence: u64,
}

/// Recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    pub total: usize,
}

fn recommendation_reason() -> LocalizedText {
    [
        ("de", "Empfohlen basierend auf Ihren Präferenzen"),
        ("en", "Recommended based on your preferences"),
        ("uk", "Рекомендовано на основі ваших вподобань"),
        ("ru", "Рекомендовано на основе ваших предпочтений"),
    ]
    .into_iter()
    .collect()
}

/// Mock confidence: 85 plus three points per id step, capped at 100.
pub fn mock_confidence(item: &CatalogItem) -> u64 {
    item.id.saturating_mul(3).saturating_add(85).min(100)
}

/// Build mock recommendations from the head of the catalog.
pub fn recommend(catalog: &[CatalogItem]) -> Vec<Recommendation> {
    catalog
        .iter()
        .take(RECOMMENDATION_COUNT)
        .map(|item| Recommendation {
            item: item.clone(),
            recommendation_reason: recommendation_reason(),
            confidence: mock_confidence(item),
        })
        .collect()
}

/// Personal recommendations.
///
/// Returns the first catalog items with a fixed localized reason; the
/// preferences in the request do not influence the result.
pub async fn recommend_products(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<RecommendRequest>,
) -> ServerResult<Json<RecommendResponse>> {
    tracing::debug!(
        preferences = request.preferences.len(),
        "Building recommendations"
    );

    let recommendations = recommend(&state.catalog);

    Ok(Json(RecommendResponse {
        total: recommendations.len(),
        recommendations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn confidence_follows_item_id() {
        let catalog = Catalog::sample();
        let scores: Vec<u64> = catalog.iter().map(mock_confidence).collect();
        assert_eq!(scores, vec![88, 91, 94]);
    }

    #[test]
    fn confidence_is_capped() {
        let mut item = Catalog::sample()[0].clone();
        item.id = u64::MAX;
        assert_eq!(mock_confidence(&item), 100);
    }

    #[test]
    fn takes_head_of_catalog() {
        let mut items = Catalog::sample().to_vec();
        let mut extra = items[0].clone();
        extra.id = 4;
        items.push(extra);

        let recs = recommend(&items);
        assert_eq!(recs.len(), RECOMMENDATION_COUNT);
        assert_eq!(recs[2].item.id, 3);
        assert!(recommend(&[]).is_empty());
    }

    #[test]
    fn recommendation_flattens_item() {
        let recs = recommend(&Catalog::sample());
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["confidence"], 88);
        assert_eq!(
            json["recommendation_reason"]["en"],
            "Recommended based on your preferences"
        );
    }
}
