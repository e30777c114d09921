//! Authentication route handlers.
//!
//! Login establishes the admin session, logout destroys it, and check-auth
//! reports the current state without ever failing.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth, set_current_user};
use crate::models::CurrentUser;
use crate::routes::MessageResponse;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

/// Authentication-state response.
#[derive(Debug, Serialize)]
pub struct CheckAuthResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Handle a login attempt.
///
/// Verifies the credentials and binds the username to a fresh session; the
/// session cookie rides back on the response.
///
/// # Errors
///
/// Returns 401 for a bad username/password pair, 500 if the session store
/// rejects the write.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state.auth().login(&body.username, &body.password).await?;

    let current = CurrentUser {
        username: user.username.clone(),
    };
    set_current_user(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to establish session: {e}")))?;

    tracing::info!(username = %user.username, "admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_owned(),
        username: user.username,
    }))
}

/// Destroy the caller's session.
///
/// # Errors
///
/// Returns 401 when no session exists, 500 if the session store rejects the
/// deletion.
pub async fn logout(
    RequireAuth(user): RequireAuth,
    session: Session,
) -> Result<Json<MessageResponse>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to destroy session: {e}")))?;

    tracing::info!(username = %user.username, "admin logged out");

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_owned(),
    }))
}

/// Report the caller's authentication state. Never fails.
pub async fn check_auth(OptionalAuth(user): OptionalAuth) -> Json<CheckAuthResponse> {
    match user {
        Some(user) => Json(CheckAuthResponse {
            authenticated: true,
            username: Some(user.username),
        }),
        None => Json(CheckAuthResponse {
            authenticated: false,
            username: None,
        }),
    }
}
