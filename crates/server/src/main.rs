//! GreenLeaf Pharmacy server - storefront and admin API.
//!
//! This binary serves the public catalog, the admin CRUD API, and the static
//! front-end pages on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON API under `/api`
//! - Flat-file JSON record stores (`products.json`, `users.json`)
//! - Session-cookie authentication (in-process store, one-day expiry)
//! - Static storefront/admin assets and uploaded images via tower-http
//!
//! The checkout flow never reaches this server: the cart lives in the
//! browser and hands off to a messaging app client-side.

#![cfg_attr(not(test), forbid(unsafe_code))]

use greenleaf_server::config::ServerConfig;
use greenleaf_server::routes;
use greenleaf_server::state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greenleaf_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The data and upload directories must exist before the first write;
    // the record files themselves are created lazily.
    std::fs::create_dir_all(&config.data_dir).expect("Failed to create data directory");
    std::fs::create_dir_all(&config.upload_dir).expect("Failed to create upload directory");

    // Build application state and router
    let state = AppState::new(config.clone());
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("server listening on {}", addr);
    tracing::info!("storefront at {}", config.base_url);
    tracing::info!("admin panel at {}/admin.html", config.base_url);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
