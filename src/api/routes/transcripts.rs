//! Transcript management endpoints.
//!
//! Provides HTTP endpoints for:
//! - Listing transcripts (GET /transcripts)
//! - Creating a transcript (POST /transcripts)
//! - Importing an uploaded plain-text file (POST /transcripts/upload)
//! - Getting a transcript (GET /transcripts/:id)
//! - Updating a transcript (PATCH /transcripts/:id)
//! - Deleting a transcript (DELETE /transcripts/:id)
//! - Selecting the active transcript (POST /transcripts/:id/select)

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::workspace::{Category, DocumentPatch, TranscriptDocument};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/transcripts", get(list_transcripts).post(create_transcript))
        .route("/transcripts/upload", post(upload_transcript))
        .route(
            "/transcripts/:id",
            get(get_transcript)
                .patch(update_transcript)
                .delete(delete_transcript),
        )
        .route("/transcripts/:id/select", post(select_transcript))
        .with_state(state)
}

/// Request body for creating a transcript manually.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTranscriptRequest {
    pub name: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
}

/// Request body for importing an uploaded plain-text file.
#[derive(Debug, Deserialize)]
pub struct UploadTranscriptRequest {
    pub file_name: String,
    pub content: String,
}

/// GET /transcripts - List documents and the active selection.
async fn list_transcripts(State(state): State<AppState>) -> Json<Value> {
    let documents = state.workspace.documents().await;
    let active_id = state.workspace.active_id().await;

    Json(json!({
        "transcripts": documents,
        "active_id": active_id,
    }))
}

/// POST /transcripts - Create a new transcript document.
async fn create_transcript(
    State(state): State<AppState>,
    body: Option<Json<CreateTranscriptRequest>>,
) -> Json<TranscriptDocument> {
    let req = body.map(|Json(r)| r).unwrap_or_default();
    let document = state
        .workspace
        .add_manual(req.name, req.content, req.category)
        .await;

    info!("Created transcript {} ({})", document.id, document.name);

    Json(document)
}

/// POST /transcripts/upload - Import one uploaded plain-text file.
async fn upload_transcript(
    State(state): State<AppState>,
    Json(req): Json<UploadTranscriptRequest>,
) -> ApiResult<Json<TranscriptDocument>> {
    if req.file_name.trim().is_empty() {
        return Err(ApiError::validation("File name is required"));
    }

    let document = state
        .workspace
        .import_file(&req.file_name, req.content)
        .await;

    info!(
        "Imported transcript {} from {}",
        document.id, req.file_name
    );

    Ok(Json(document))
}

/// GET /transcripts/:id - Fetch a single document.
async fn get_transcript(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<TranscriptDocument>> {
    let document = state
        .workspace
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found(format!("Transcript {id} not found")))?;

    Ok(Json(document))
}

/// PATCH /transcripts/:id - Merge supplied fields into a document.
async fn update_transcript(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<DocumentPatch>,
) -> ApiResult<Json<TranscriptDocument>> {
    let document = state.workspace.update(&id, patch).await?;
    Ok(Json(document))
}

/// DELETE /transcripts/:id - Remove a document, re-selecting per the
/// active-id invariant.
async fn delete_transcript(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    state.workspace.delete(&id).await?;
    let active_id = state.workspace.active_id().await;

    info!("Deleted transcript {}", id);

    Ok(Json(json!({
        "deleted": id,
        "active_id": active_id,
    })))
}

/// POST /transcripts/:id/select - Set the active document.
async fn select_transcript(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<Value>> {
    state.workspace.select(&id).await?;
    Ok(Json(json!({ "active_id": id })))
}
