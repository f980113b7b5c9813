//! Seed catalog handlers (Basic auth)
//!
//! These routes read only the in-memory seed list. The product documents
//! managed by `/add_product` and friends live in a separate store and are
//! never visible here.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::extractors::BasicAuth;
use crate::storage::SeedProduct;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    products: Vec<SeedProduct>,
}

pub async fn list(_auth: BasicAuth, State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: state.catalog.all().to_vec(),
    })
}

pub async fn get(
    _auth: BasicAuth,
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<SeedProduct>> {
    // Only integer ids ever match; anything else is a miss.
    let id: i64 = product_id
        .parse()
        .map_err(|_| ApiError::NotFound("Product not found".to_string()))?;

    let product = state
        .catalog
        .find(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}
