//! Bazaar Server binary
//!
//! Wires configuration, the two SQLite-backed stores, the seed catalog and
//! the credential provider into the HTTP router and serves it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use bazaar_server::services::StaticCredentials;
use bazaar_server::storage::{ProductStore, SeedCatalog, UserStore};
use bazaar_server::{build_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Bazaar Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    // Load configuration
    info!("Loading configuration...");
    let config = load_config()
        .await
        .context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, users_db={}, products_db={}",
        config.bind_address, config.users_db_path, config.products_db_path
    );

    // Initialize the stores
    info!("Initializing user store...");
    let users = Arc::new(
        UserStore::new(&config.users_db_path)
            .await
            .context("Failed to initialize user store")?,
    );

    info!("Initializing product store...");
    let products = Arc::new(
        ProductStore::new(&config.products_db_path)
            .await
            .context("Failed to initialize product store")?,
    );

    let catalog = Arc::new(SeedCatalog::new());
    let credentials = Arc::new(StaticCredentials::new(
        config.basic_auth_username.clone(),
        config.basic_auth_password.clone(),
    ));

    // Create app state
    let state = AppState {
        users,
        products,
        catalog,
        credentials,
    };

    // Build router
    info!("Building HTTP router...");
    let app = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete");
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    users_db_path: String,
    products_db_path: String,
    basic_auth_username: String,
    basic_auth_password: String,
}

async fn load_config() -> Result<Config> {
    info!("Loading configuration from environment...");

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data"));
    info!("Data directory: {}", data_dir.display());

    tokio::fs::create_dir_all(&data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let users_db_path = std::env::var("USERS_DATABASE_PATH")
        .unwrap_or_else(|_| data_dir.join("users.db").to_string_lossy().to_string());

    let products_db_path = std::env::var("PRODUCTS_DATABASE_PATH")
        .unwrap_or_else(|_| data_dir.join("products.db").to_string_lossy().to_string());

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let basic_auth_username =
        std::env::var("BASIC_AUTH_USERNAME").unwrap_or_else(|_| "username".to_string());
    let basic_auth_password = std::env::var("BASIC_AUTH_PASSWORD").unwrap_or_else(|_| {
        warn!("BASIC_AUTH_PASSWORD not set, using default (insecure for production)");
        "password".to_string()
    });

    Ok(Config {
        bind_address,
        users_db_path,
        products_db_path,
        basic_auth_username,
        basic_auth_password,
    })
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received");
}
