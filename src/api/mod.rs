//! REST API server for recap.
//!
//! Provides HTTP endpoints for:
//! - The summarization proxy (POST /api/summarize)
//! - The delivery proxy (POST /api/send-email)
//! - Transcript management (/transcripts)
//! - Summary modes and the pending instruction (/modes, /instruction)
//! - Composite workspace operations (/workspace)

pub mod error;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tracing::info;

use crate::deliver::MailBackend;
use crate::summarize::SummaryBackend;
use crate::workspace::{SummaryMachine, WorkspaceHandle};

/// Shared state for all routes. Clients are optional so that a state
/// constructed without credentials reports a configuration error on the
/// routes that need them instead of failing to start.
#[derive(Clone)]
pub struct AppState {
    pub workspace: WorkspaceHandle,
    pub summarizer: Option<Arc<dyn SummaryBackend>>,
    pub mailer: Option<Arc<dyn MailBackend>>,
    pub sender: Option<String>,
    pub subject: String,
}

impl AppState {
    pub fn machine(&self) -> SummaryMachine {
        SummaryMachine::new(
            self.workspace.clone(),
            self.summarizer.clone(),
            self.mailer.clone(),
            self.sender.clone(),
            self.subject.clone(),
        )
    }
}

pub struct ApiServer {
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState, port: u16) -> Self {
        Self { port, state }
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET    /                       - Service info");
        info!("  GET    /version                - Version info");
        info!("  POST   /api/summarize          - Summarize a transcript");
        info!("  POST   /api/send-email         - Email a summary");
        info!("  GET    /transcripts            - List transcripts");
        info!("  POST   /transcripts            - Create a transcript");
        info!("  POST   /transcripts/upload     - Import a plain-text file");
        info!("  GET    /transcripts/:id        - Get a transcript");
        info!("  PATCH  /transcripts/:id        - Update a transcript");
        info!("  DELETE /transcripts/:id        - Delete a transcript");
        info!("  POST   /transcripts/:id/select - Select the active transcript");
        info!("  GET    /modes                  - List summary modes");
        info!("  POST   /modes/:key/apply       - Apply a summary mode");
        info!("  PUT    /instruction            - Set the instruction");
        info!("  POST   /workspace/summarize    - Summarize the active transcript");
        info!("  POST   /workspace/send         - Email the active summary");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Assemble the full router. Split out from [`ApiServer::start`] so tests
/// can exercise it without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/version", get(version))
        .merge(routes::summarize::router(state.clone()))
        .merge(routes::send_email::router(state.clone()))
        .merge(routes::transcripts::router(state.clone()))
        .merge(routes::modes::router(state.clone()))
        .merge(routes::workspace::router(state))
        .layer(ServiceBuilder::new())
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "recap",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "recap"
    }))
}
