//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//!
//! # Auth
//! POST /api/login               - Create a session from credentials
//! POST /api/logout              - Destroy the session (requires session)
//! GET  /api/check-auth          - Report authentication state
//!
//! # Products
//! GET    /api/products          - Full catalog (public)
//! POST   /api/products          - Add a product (requires session)
//! PUT    /api/products/{id}     - Update a product (requires session)
//! DELETE /api/products/{id}     - Delete a product (requires session)
//!
//! # Uploads
//! POST /api/upload              - Store a product image (requires session,
//!                                 multipart field `image`)
//!
//! # Static
//! /                             - Storefront and admin pages (public dir)
//! /uploads                      - Stored product images (upload dir)
//! ```

pub mod auth;
pub mod products;
pub mod upload;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// JSON body carrying only a human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/check-auth", get(auth::check_auth))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::remove),
        )
        .route("/upload", post(upload::upload_image))
}

/// Assemble the full application.
///
/// Shared by the binary and the integration tests so both serve the exact
/// same stack: API routes, static mounts, session, CORS, and request
/// tracing.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .nest_service("/uploads", ServeDir::new(&state.config().upload_dir))
        .fallback_service(ServeDir::new(&state.config().public_dir))
        .layer(session_layer)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the data files.
async fn health() -> &'static str {
    "ok"
}
