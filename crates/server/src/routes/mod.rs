//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: liveness and readiness probes
//! - `products`: catalog listing
//! - `search`: keyword search over the catalog
//! - `recommend`: mock personal recommendations
//! - `try_on`: mock virtual try-on

pub mod health;
pub mod products;
pub mod recommend;
pub mod search;
pub mod try_on;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Public service name reported by `GET /`.
pub const SERVICE_NAME: &str = "APEX.SPHERE AI";

/// Service info
///
/// Returns the service name, version, run status and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "service": "APEX.SPHERE AI",
///   "version": "0.1.0",
///   "status": "running",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn service_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": [
            "GET /api/products",
            "POST /ai/search",
            "POST /ai/recommend",
            "POST /ai/virtual-try",
            "GET /health",
            "GET /ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
