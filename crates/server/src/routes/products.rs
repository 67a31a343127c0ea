use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use catalog::CatalogItem;
use serde::Serialize;
use std::sync::Arc;

/// Catalog listing response
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<CatalogItem>,
    pub total: usize,
}

/// List every product in the served catalog snapshot, in catalog order.
pub async fn list_products(State(state): State<Arc<ServerState>>) -> Json<ProductsResponse> {
    let products = state.catalog.items().to_vec();

    Json(ProductsResponse {
        total: products.len(),
        products,
    })
}
