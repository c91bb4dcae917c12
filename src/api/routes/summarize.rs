//! Summarization proxy endpoint.
//!
//! `POST /api/summarize` forwards a transcript and an instruction to the
//! hosted completion model and returns the generated text. Stateless
//! pass-through with validation; no retries, no streaming.

use axum::{extract::State, response::Json, routing::post, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::workspace::DEFAULT_INSTRUCTION;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize))
        .with_state(state)
}

/// POST /api/summarize - Generate a summary for a transcript.
///
/// The body is validated by hand so that a missing, empty, or non-string
/// `transcript` is reported as a 400 rather than a deserialization
/// rejection.
async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let transcript = body
        .get("transcript")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("Transcript is required"))?;

    let instruction = body
        .get("instruction")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_INSTRUCTION);

    let summarizer = state
        .summarizer
        .as_ref()
        .ok_or_else(|| ApiError::configuration("GROQ_API_KEY not configured"))?;

    info!("Summarization requested ({} chars)", transcript.len());

    let summary = summarizer
        .summarize(transcript, instruction)
        .await
        .map_err(|e| {
            error!("Error generating summary: {}", e);
            ApiError::upstream("Failed to generate summary")
        })?;

    Ok(Json(json!({ "summary": summary })))
}
