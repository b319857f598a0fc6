use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::blueprint::ValidationErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A submission that failed validation. Carries every invalid field.
    #[error("Invalid submission: {0}")]
    Submission(ValidationErrors),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                let body = Json(json!({
                    "error": {
                        "code": "NOT_FOUND",
                        "message": message
                    }
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Submission(errors) => {
                let body = Json(json!({
                    "ok": false,
                    "errors": errors
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
        }
    }
}
