use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lyceum_core::error::CoreError;
use lyceum_db::StoreError;
use serde_json::json;

/// Message returned with every rejected write.
pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to perform this action";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Permission, not-found and language errors keep the bodies existing clients
/// rely on; everything else uses the `{ "error", "code" }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lyceum_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the document store.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- Bodies kept verbatim for existing clients ---
            AppError::Core(CoreError::Forbidden) => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": PERMISSION_DENIED_MESSAGE })),
            )
                .into_response(),
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity} not found")).into_response()
            }
            AppError::Core(CoreError::InvalidLanguage(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid language").into_response()
            }

            // --- Envelope errors ---
            AppError::Core(CoreError::Validation(msg)) => {
                envelope(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                envelope(StatusCode::BAD_REQUEST, "STORAGE_ERROR", err.to_string())
            }
            AppError::BadRequest(msg) => envelope(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        }
    }
}

fn envelope(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });

    (status, Json(body)).into_response()
}
