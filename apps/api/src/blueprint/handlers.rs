use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::blueprint::models::CareerBlueprint;
use crate::blueprint::{validate_submission, OptionCatalog};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ValidatedResponse {
    pub ok: bool,
    pub data: CareerBlueprint,
}

/// POST /api/v1/career-blueprint/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<ValidatedResponse>, AppError> {
    match validate_submission(&raw, &state.catalog) {
        Ok(data) => {
            debug!("Career blueprint submission passed validation");
            Ok(Json(ValidatedResponse { ok: true, data }))
        }
        Err(errors) => {
            info!(
                error_count = errors.len(),
                catalog_version = %state.catalog.version,
                "Career blueprint submission rejected"
            );
            Err(AppError::Submission(errors))
        }
    }
}

/// GET /api/v1/career-blueprint/options
pub async fn handle_options(State(state): State<AppState>) -> Json<OptionCatalog> {
    Json(state.catalog.as_ref().clone())
}
