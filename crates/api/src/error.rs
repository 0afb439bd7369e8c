use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use encore_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors from the repository
/// layer. Implements [`IntoResponse`] to produce consistent JSON error pages.
/// Create and edit submissions never surface through this type; see
/// [`crate::mutation`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `encore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        error_page(status, code, message)
    }
}

/// Render the `{ "error": ..., "code": ... }` page for a status.
pub fn error_page(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = json!({
        "error": message.into(),
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// The 404 page for a request that matches no route.
pub fn page_not_found() -> Response {
    error_page(StatusCode::NOT_FOUND, "NOT_FOUND", "Page not found")
}

/// Router fallback.
pub async fn not_found_page() -> Response {
    page_not_found()
}

/// Panic handler for `CatchPanicLayer`: log the payload, render a 500 page.
pub fn panic_page(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = detail, "Request handler panicked");
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred",
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Lookups return `Option`, so a missing row never arrives here; every
/// database error is a 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
