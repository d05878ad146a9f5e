//! API Routes for wishbox
//!
//! This module combines all routes into a single router.

mod pages;
mod render;
pub mod status;
mod wishes;

use axum::Router;

use crate::AppState;

/// Build the complete router.
///
/// Route structure:
/// - /, /admin - Server-rendered form and admin page (public, admin page gated in-handler)
/// - /api/wishes - Wish submission (public) and listing (admin session)
/// - /api/admin/session - Password to session token exchange
/// - /health, /health/ready, /health/live - Health checks (public)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(pages::routes())
        .nest("/api", api_routes(state))
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(wishes::routes())
        .merge(wishes::admin_routes(state))
}
