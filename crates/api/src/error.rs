use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use survey_core::error::CoreError;
use survey_db::StoreError;

/// Body message for any rejected submission.
pub const MISSING_FIELDS_MESSAGE: &str = "missing fields";

/// Body message for any persistence failure. Details stay in the server log.
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and [`StoreError`] for
/// persistence failures. Implements [`IntoResponse`] to produce consistent
/// `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `survey_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The persistence collaborator failed or was unreachable.
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::MissingFields(fields)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": MISSING_FIELDS_MESSAGE,
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                }),
            ),
            AppError::Persistence(err) => {
                tracing::error!(error = %err, "Persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": SERVER_ERROR_MESSAGE,
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
