//! Summary mode endpoints.
//!
//! Provides HTTP endpoints for:
//! - Listing the fixed mode table (GET /modes)
//! - Applying a mode to the pending instruction (POST /modes/:key/apply)
//! - Setting a free-text instruction (PUT /instruction)

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::workspace::SummaryMode;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/modes", get(list_modes))
        .route("/modes/:key/apply", post(apply_mode))
        .route("/instruction", put(set_instruction))
        .with_state(state)
}

/// Request body for setting the free-text instruction.
#[derive(Debug, Deserialize)]
pub struct SetInstructionRequest {
    pub instruction: String,
}

/// GET /modes - The fixed mode table plus current session state.
async fn list_modes(State(state): State<AppState>) -> Json<Value> {
    let modes: Vec<Value> = SummaryMode::ALL
        .iter()
        .map(|mode| {
            json!({
                "key": mode.key(),
                "label": mode.label(),
                "instruction": mode.instruction(),
            })
        })
        .collect();

    Json(json!({
        "modes": modes,
        "instruction": state.workspace.instruction().await,
        "selected_mode": state.workspace.selected_mode().await,
    }))
}

/// POST /modes/:key/apply - Fill the instruction from a fixed mode.
async fn apply_mode(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    let mode = SummaryMode::from_key(&key)
        .ok_or_else(|| ApiError::not_found(format!("Unknown summary mode {key}")))?;

    state.workspace.apply_mode(mode).await;

    Ok(Json(json!({
        "selected_mode": mode,
        "instruction": mode.instruction(),
    })))
}

/// PUT /instruction - Set a free-text instruction, clearing any selected
/// mode.
async fn set_instruction(
    State(state): State<AppState>,
    Json(req): Json<SetInstructionRequest>,
) -> Json<Value> {
    state.workspace.set_instruction(req.instruction).await;

    Json(json!({
        "instruction": state.workspace.instruction().await,
        "selected_mode": Value::Null,
    }))
}
