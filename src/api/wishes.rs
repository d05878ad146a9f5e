//! Wish Routes
//!
//! JSON API over the wish store and the access gate.
//!
//! Routes:
//! - POST /api/wishes - Submit a wish
//! - GET /api/wishes - Wishes grouped by class (admin session required)
//! - POST /api/admin/session - Exchange the admin password for a session token

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::GiftWish;
use crate::middleware::{require_admin_session, AdminSession};
use crate::models::{WishSubmission, WishesByClass};
use crate::{AppState, Result};

/// Public wish routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/wishes", post(create_wish))
}

/// Admin routes: session exchange is public, listing is guarded.
pub fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/wishes", get(list_wishes))
        .layer(axum::middleware::from_fn_with_state(
            state,
            require_admin_session,
        ));

    Router::new()
        .route("/admin/session", post(create_session))
        .merge(protected)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to open an admin session.
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub password: String,
}

/// Admin session token.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Submit a wish.
///
/// POST /api/wishes
#[axum::debug_handler]
async fn create_wish(
    State(state): State<AppState>,
    Json(submission): Json<WishSubmission>,
) -> Result<(StatusCode, Json<GiftWish>)> {
    let wish = state.wishes.create(submission).await?;
    Ok((StatusCode::CREATED, Json(wish)))
}

/// List wishes grouped by class.
///
/// GET /api/wishes
#[axum::debug_handler]
async fn list_wishes(
    State(state): State<AppState>,
    Extension(_session): Extension<AdminSession>,
) -> Result<Json<WishesByClass>> {
    let grouped = state.wishes.list_grouped_by_class().await?;
    Ok(Json(grouped))
}

/// Exchange the admin password for a session token.
///
/// POST /api/admin/session
#[axum::debug_handler]
async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<SessionResponse>> {
    state.gate.verify(&request.password)?;
    let token = state.gate.issue_session_token()?;
    Ok(Json(SessionResponse { token }))
}
