//! Product CRUD route handlers.
//!
//! Thin translation between HTTP and the catalog service: request-shape
//! extraction on the way in, status code and JSON body on the way out. The
//! list endpoint is public; every mutation is guarded by [`RequireAuth`].

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use greenleaf_core::{Product, ProductDraft, ProductId, ProductPatch};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// Response carrying the affected record alongside the message.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

/// Get the full catalog (public).
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().list_all().await)
}

/// Add a product.
///
/// # Errors
///
/// Returns 400 for missing/invalid fields, 409 for a duplicate id, 401
/// without a session.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<ProductResponse>)> {
    let product = state.catalog().create(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            message: "Product added successfully".to_owned(),
            product,
        }),
    ))
}

/// Update a product in place.
///
/// The path id names the record; an `id` in the body is ignored.
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 if the merged record is invalid, 401
/// without a session.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .catalog()
        .update(&ProductId::new(id), &patch)
        .await?;

    Ok(Json(ProductResponse {
        message: "Product updated successfully".to_owned(),
        product,
    }))
}

/// Delete a product.
///
/// # Errors
///
/// Returns 404 for an unknown id, 401 without a session.
pub async fn remove(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.catalog().delete(&ProductId::new(id)).await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_owned(),
    }))
}
