use axum::{extract::Path, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::onboarding::templates::{empty_onboarding_state, empty_section_state, SECTIONS};

/// GET /api/v1/onboarding/empty-state
pub async fn handle_empty_state() -> Json<Value> {
    Json(empty_onboarding_state())
}

/// GET /api/v1/onboarding/empty-state/:section
pub async fn handle_empty_section(Path(section): Path<String>) -> Result<Json<Value>, AppError> {
    empty_section_state(&section).map(Json).ok_or_else(|| {
        AppError::NotFound(format!(
            "Unknown onboarding section '{section}'. Expected one of: {}",
            SECTIONS.join(", ")
        ))
    })
}
