//! Bazaar Server
//!
//! A minimal CRUD service exposing two unrelated resources: user records in
//! a relational SQLite store and product documents in a separate
//! document-style store, plus a Basic-auth protected seed catalog.
//!
//! Uses SQLite (embedded) for both stores; the user table and the product
//! collection live in separate database files with no shared schema.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use services::CredentialProvider;
use storage::{ProductStore, SeedCatalog, UserStore};

pub use error::{ApiError, Result};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub products: Arc<ProductStore>,
    pub catalog: Arc<SeedCatalog>,
    pub credentials: Arc<dyn CredentialProvider>,
}

/// Build the HTTP router.
///
/// The `/products` routes serve the in-memory seed catalog and require
/// Basic credentials; the `/add_product` family manages the product
/// document store and requires none. The two product sources are
/// independent and never see each other's data.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // User records (relational store)
        .route("/add_user", post(handlers::users::add))
        .route("/delete_user/:username", delete(handlers::users::delete))
        .route("/get_user/:username", get(handlers::users::get))
        // Product documents (document store)
        .route("/add_product", post(handlers::products::add))
        .route(
            "/delete_product/:product_id",
            delete(handlers::products::delete),
        )
        .route("/get_product/:product_id", get(handlers::products::get))
        // Seed catalog (Basic auth)
        .route("/products", get(handlers::catalog::list))
        .route("/products/:product_id", get(handlers::catalog::get))
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
