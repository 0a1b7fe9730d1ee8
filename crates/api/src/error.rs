use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pawsona_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses of the shape `{ "error": ..., "errorType": ... }`,
/// where `errorType` is the stable tag clients branch on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pawsona_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::Core(core) => (core_status(core), core.error_type(), core.to_string()),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "empty", msg.clone()),
        };

        let body = json!({
            "error": message,
            "errorType": error_type,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// HTTP status for each domain error.
fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        CoreError::InvalidCode | CoreError::JobNotFound(_) => StatusCode::NOT_FOUND,
        CoreError::AlreadyUsed | CoreError::CodePending => StatusCode::CONFLICT,
        CoreError::Expired | CoreError::Exhausted => StatusCode::GONE,
        CoreError::Provider(_) => StatusCode::BAD_GATEWAY,
        CoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
