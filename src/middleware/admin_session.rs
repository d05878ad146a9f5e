//! Admin session middleware.
//!
//! Guards the JSON admin API. The session token issued by the access gate
//! may be sent either way:
//! - `X-Admin-Session: {token}` header
//! - `?s={token}` query parameter, matching the admin page redirect

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::Error, AppState};

/// Header carrying the admin session token.
pub const ADMIN_SESSION_HEADER: &str = "x-admin-session";

/// Query parameter carrying the admin session token.
pub const ADMIN_SESSION_PARAM: &str = "s";

/// Marker injected into request extensions once the session token checks out.
#[derive(Clone, Debug)]
pub struct AdminSession;

/// Extract the session token from the header or the query string.
fn extract_session_token(req: &Request<Body>) -> Option<String> {
    if let Some(value) = req.headers().get(ADMIN_SESSION_HEADER) {
        if let Ok(token) = value.to_str() {
            return Some(token.to_string());
        }
    }

    let query = req.uri().query()?;
    query.split('&').find_map(|part| {
        let token = part
            .strip_prefix(ADMIN_SESSION_PARAM)
            .and_then(|rest| rest.strip_prefix('='))?;
        // URL decode the token
        match urlencoding::decode(token) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(_) => Some(token.to_string()),
        }
    })
}

/// Middleware that requires a valid admin session token.
///
/// # Errors
///
/// Returns 503 when no admin password is configured and 401 when the token
/// is missing or does not verify.
pub async fn require_admin_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Error> {
    if !state.gate.is_configured() {
        return Err(Error::MissingSecret);
    }

    let token = extract_session_token(&req).ok_or(Error::Unauthenticated)?;
    if !state.gate.validate_session_token(&token) {
        tracing::debug!("Rejected admin session token");
        return Err(Error::Unauthenticated);
    }

    req.extensions_mut().insert(AdminSession);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_token_from_query() {
        let req = request("/api/wishes?x=1&s=abc.def");
        assert_eq!(extract_session_token(&req).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_query_token_is_percent_decoded() {
        let req = request("/api/wishes?s=abc%2Edef%2B1");
        assert_eq!(extract_session_token(&req).as_deref(), Some("abc.def+1"));
    }

    #[test]
    fn test_similar_param_is_ignored() {
        let req = request("/api/wishes?session=abc");
        assert_eq!(extract_session_token(&req), None);
    }

    #[test]
    fn test_header_wins_over_query() {
        let req = Request::builder()
            .uri("/api/wishes?s=from-query")
            .header(ADMIN_SESSION_HEADER, "from-header")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_session_token(&req).as_deref(), Some("from-header"));
    }
}
