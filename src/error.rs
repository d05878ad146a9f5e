//! Error types for wishbox.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system. Variants that reach a visitor carry
//! a pre-localized (Polish) message; diagnostic detail is logged where
//! the error is produced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a wish could not be saved.
pub const CREATE_FAILED_MESSAGE: &str = "Nie udało się wysłać listu do Świętego Mikołaja";

/// Message shown when the wish list could not be loaded.
pub const LIST_FAILED_MESSAGE: &str = "Nie udało się pobrać życzeń";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Gate errors
    #[error("Brak hasła w konfiguracji serwera")]
    MissingSecret,

    #[error("Nieprawidłowe hasło")]
    InvalidPassword,

    #[error("Brak dostępu")]
    Unauthenticated,

    // Submission errors
    #[error("{0}")]
    Validation(String),

    /// Store failure already logged; carries the visitor-facing message.
    #[error("{0}")]
    Persistence(&'static str),

    // Startup errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Store unreachable or a read/write was rejected.
    Persistence,
    /// The admin secret (or other setting) is missing or malformed.
    Configuration,
    /// Wrong password or missing admin session.
    Authentication,
    /// Submitted data could not be accepted.
    Validation,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Persistence(_) | Self::Database(_) => ErrorKind::Persistence,
            Self::MissingSecret | Self::InvalidConfig(_) => ErrorKind::Configuration,
            Self::InvalidPassword | Self::Unauthenticated => ErrorKind::Authentication,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // 401
            Self::InvalidPassword | Self::Unauthenticated => StatusCode::UNAUTHORIZED,

            // 400
            Self::Validation(_) => StatusCode::BAD_REQUEST,

            // 503
            Self::MissingSecret => StatusCode::SERVICE_UNAVAILABLE,

            // 500
            Self::Persistence(_)
            | Self::InvalidConfig(_)
            | Self::Database(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSecret => "SERVER_MISCONFIGURED",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to a visitor.
    ///
    /// Infrastructure errors are collapsed into a generic message so that
    /// database details never leave the process.
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::InvalidConfig(_) => {
                "Wystąpił nieoczekiwany błąd serwera".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.user_message(),
            }
        }));

        (status, body).into_response()
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
