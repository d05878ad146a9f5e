//! Page Routes
//!
//! Server-rendered submission form and admin overview.
//!
//! Routes:
//! - GET / - Submission form
//! - POST / - Submit the form
//! - GET /admin - Password form, session redirect, or wish tables

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use super::render;
use crate::middleware::ADMIN_SESSION_PARAM;
use crate::models::WishSubmission;
use crate::AppState;

/// Build page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form).post(submit))
        .route("/admin", get(admin))
}

/// Query parameters of the admin page.
#[derive(Debug, Deserialize, Default)]
pub struct AdminQuery {
    /// Password typed into the login form.
    pub password: Option<String>,
    /// Session token from the post-login redirect.
    pub s: Option<String>,
}

/// Empty submission form.
///
/// GET /
async fn form() -> Html<String> {
    Html(render::form_page(&WishSubmission::default(), None))
}

/// Handle a form submission.
///
/// POST /
async fn submit(State(state): State<AppState>, Form(submission): Form<WishSubmission>) -> Response {
    match state.wishes.create(submission.clone()).await {
        Ok(wish) => Html(render::thank_you_page(&wish)).into_response(),
        Err(e) => (
            e.status_code(),
            Html(render::form_page(&submission, Some(&e.user_message()))),
        )
            .into_response(),
    }
}

/// Admin overview.
///
/// GET /admin
///
/// A correct `password` redirects to `/admin?s=<token>`; a valid `s`
/// renders the wish tables; anything else shows the login form.
async fn admin(State(state): State<AppState>, Query(query): Query<AdminQuery>) -> Response {
    if let Some(password) = query.password.as_deref().filter(|p| !p.is_empty()) {
        let token = state
            .gate
            .verify(password)
            .and_then(|()| state.gate.issue_session_token());

        return match token {
            Ok(token) => {
                tracing::info!("Admin session opened");
                Redirect::to(&format!(
                    "/admin?{}={}",
                    ADMIN_SESSION_PARAM,
                    urlencoding::encode(&token)
                ))
                .into_response()
            }
            Err(e) => (
                e.status_code(),
                Html(render::login_page(Some(&e.user_message()))),
            )
                .into_response(),
        };
    }

    let authenticated = query
        .s
        .as_deref()
        .is_some_and(|token| state.gate.validate_session_token(token));

    if !authenticated {
        let notice = (!state.gate.is_configured())
            .then(|| crate::Error::MissingSecret.user_message());
        return Html(render::login_page(notice.as_deref())).into_response();
    }

    let listing = async {
        let total = state.wishes.count().await?;
        let grouped = state.wishes.list_grouped_by_class().await?;
        Ok::<_, crate::Error>((total, grouped))
    }
    .await;

    match listing {
        Ok((total, grouped)) => Html(render::admin_page(total, &grouped)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::error_page(&e.user_message())),
        )
            .into_response(),
    }
}
