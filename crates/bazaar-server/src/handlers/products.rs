//! Product document handlers (document store)

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    name: Option<String>,
    price: Option<f64>,
}

pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddProductRequest>,
) -> Result<Json<Value>> {
    let (name, price) = match (req.name, req.price) {
        (Some(name), Some(price)) if !name.is_empty() => (name, price),
        _ => {
            return Err(ApiError::Validation(
                "Name and price are required".to_string(),
            ))
        }
    };

    // A zero or negative price is rejected outright rather than being
    // mistaken for a missing field.
    if price <= 0.0 {
        return Err(ApiError::Validation(
            "Price must be greater than zero".to_string(),
        ));
    }

    let product_id = state
        .products
        .insert(&json!({ "name": name, "price": price }))
        .await?;

    info!("Product added: {} ({})", name, product_id);
    Ok(Json(json!({
        "message": "Product added successfully",
        "product_id": product_id,
    })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>> {
    if !state.products.delete(&product_id).await? {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    info!("Product deleted: {}", product_id);
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Value>> {
    let product = state
        .products
        .find(&product_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(json!({ "product": product })))
}
