use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Value};

use eventdesk_core::error::{CoreError, StorageError, ValidationError};
use eventdesk_core::text::{truncate_detail, MAX_ERROR_DETAIL_CHARS};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "code": ..., "detail": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `eventdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be read as JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// The query string could not be deserialized.
    #[error(transparent)]
    Query(#[from] QueryRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Core(CoreError::Storage(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(err)) => {
                tracing::debug!(error = %err, "Submission rejected");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    field_details(err),
                )
            }
            AppError::Core(CoreError::Storage(err)) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    Value::String(storage_detail(err)),
                )
            }

            // --- HTTP-specific errors ---
            AppError::Json(rejection) => (
                rejection.status(),
                "BAD_REQUEST",
                Value::String(rejection.body_text()),
            ),
            AppError::Query(rejection) => (
                rejection.status(),
                "BAD_REQUEST",
                Value::String(rejection.body_text()),
            ),
        };

        let body = json!({
            "code": code,
            "detail": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Client-facing text for a storage failure: the driver message, truncated
/// to [`MAX_ERROR_DETAIL_CHARS`] characters.
pub fn storage_detail(err: &StorageError) -> String {
    format!(
        "Database error: {}",
        truncate_detail(err.detail(), MAX_ERROR_DETAIL_CHARS)
    )
}

/// One `{ loc, msg, type }` entry per rejected field.
fn field_details(err: &ValidationError) -> Value {
    err.errors
        .iter()
        .map(|e| {
            json!({
                "loc": [e.location.as_str(), e.field],
                "msg": e.message,
                "type": e.kind.as_str(),
            })
        })
        .collect()
}
