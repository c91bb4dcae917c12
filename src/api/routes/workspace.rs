//! Composite workspace endpoints.
//!
//! Provides HTTP endpoints for:
//! - Summarizing the active transcript (POST /workspace/summarize)
//! - Emailing the active transcript's summary (POST /workspace/send)
//!
//! Both delegate to the [`SummaryMachine`](crate::workspace::SummaryMachine),
//! which carries the stale-response guard.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;

use crate::api::error::ApiResult;
use crate::api::AppState;
use crate::workspace::{DeliveryReceipt, GeneratedSummary};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/workspace/summarize", post(summarize_active))
        .route("/workspace/send", post(send_active))
        .with_state(state)
}

/// Request body for emailing the active summary.
#[derive(Debug, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub recipients: String,
}

/// POST /workspace/summarize - Summarize the active transcript with the
/// pending instruction.
async fn summarize_active(State(state): State<AppState>) -> ApiResult<Json<GeneratedSummary>> {
    let result = state.machine().generate_summary().await?;
    Ok(Json(result))
}

/// POST /workspace/send - Email the active transcript's summary to a
/// comma-separated recipient list.
async fn send_active(
    State(state): State<AppState>,
    body: Option<Json<SendRequest>>,
) -> ApiResult<Json<DeliveryReceipt>> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let receipt = state.machine().send_summary(&req.recipients).await?;
    Ok(Json(receipt))
}
