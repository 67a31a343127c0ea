use crate::error::{ServerError, ServerResult};
use crate::extract::ApiJson;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Fixed fit score reported by the mock.
pub const MOCK_FIT_SCORE: u8 = 92;

/// Virtual try-on request
#[derive(Debug, Default, Deserialize)]
pub struct VirtualTryRequest {
    /// Product to try on
    #[serde(default)]
    pub product_id: Option<u64>,

    /// User photo as base64 or URL; not inspected by the mock
    #[serde(default)]
    pub user_photo: Option<String>,
}

/// Virtual try-on response
#[derive(Debug, Serialize)]
pub struct VirtualTryResponse {
    pub product_id: u64,
    pub try_on_result: TryOnResult,
}

#[derive(Debug, Serialize)]
pub struct TryOnResult {
    pub success: bool,
    pub fit_score: u8,
    pub preview_url: String,
    pub recommendations: FitAdvice,
}

#[derive(Debug, Serialize)]
pub struct FitAdvice {
    pub size: String,
    pub fit: String,
    pub style: String,
}

/// Placeholder preview image for `product_id`.
pub fn preview_url(product_id: u64) -> String {
    format!(
        "https://via.placeholder.com/400x600/3b82f6/white?text=Virtual+Try+Product+{product_id}"
    )
}

/// Canned try-on result; the product id is echoed without a catalog lookup.
pub fn mock_try_on(product_id: u64) -> VirtualTryResponse {
    VirtualTryResponse {
        product_id,
        try_on_result: TryOnResult {
            success: true,
            fit_score: MOCK_FIT_SCORE,
            preview_url: preview_url(product_id),
            recommendations: FitAdvice {
                size: "Рекомендуем размер M".to_string(),
                fit: "Отлично подходит к вашей фигуре".to_string(),
                style: "Этот стиль вам очень идет".to_string(),
            },
        },
    }
}

/// Virtual try-on
pub async fn virtual_try(
    ApiJson(request): ApiJson<VirtualTryRequest>,
) -> ServerResult<Json<VirtualTryResponse>> {
    let product_id = request
        .product_id
        .ok_or_else(|| ServerError::BadRequest("product_id is required".to_string()))?;

    tracing::debug!(
        product_id,
        photo_bytes = request.user_photo.as_deref().map_or(0, str::len),
        "Virtual try-on requested"
    );

    Ok(Json(mock_try_on(product_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_url_embeds_product() {
        assert!(preview_url(7).ends_with("Virtual+Try+Product+7"));
    }

    #[test]
    fn mock_result_shape() {
        let json = serde_json::to_value(mock_try_on(2)).unwrap();
        assert_eq!(json["product_id"], 2);
        assert_eq!(json["try_on_result"]["success"], true);
        assert_eq!(json["try_on_result"]["fit_score"], 92);
        assert_eq!(
            json["try_on_result"]["recommendations"]["size"],
            "Рекомендуем размер M"
        );
    }
}
