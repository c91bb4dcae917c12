//! In-memory transcript workspace.
//!
//! The [`Workspace`] store owns the document list and session state; the
//! [`WorkspaceHandle`] wraps it for sharing between API handlers. The
//! [`SummaryMachine`] drives the two outbound flows (summarize, email).

pub mod document;
pub mod machine;
pub mod modes;
pub mod store;

pub use document::{Category, TranscriptDocument};
pub use machine::{DeliveryReceipt, FlowError, GeneratedSummary, SummaryMachine};
pub use modes::{SummaryMode, DEFAULT_INSTRUCTION};
pub use store::{DocumentPatch, StoreError, Workspace};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Thread-safe handle for sharing the workspace between API handlers.
#[derive(Clone, Default)]
pub struct WorkspaceHandle {
    inner: Arc<Mutex<Workspace>>,
}

impl WorkspaceHandle {
    pub async fn add_manual(
        &self,
        name: Option<String>,
        content: Option<String>,
        category: Option<Category>,
    ) -> TranscriptDocument {
        self.inner.lock().await.add_manual(name, content, category)
    }

    pub async fn import_file(&self, file_name: &str, content: String) -> TranscriptDocument {
        self.inner.lock().await.import_file(file_name, content)
    }

    pub async fn update(
        &self,
        id: &str,
        patch: DocumentPatch,
    ) -> Result<TranscriptDocument, StoreError> {
        self.inner.lock().await.update(id, patch)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().await.delete(id)
    }

    pub async fn select(&self, id: &str) -> Result<(), StoreError> {
        self.inner.lock().await.select(id)
    }

    pub async fn get(&self, id: &str) -> Option<TranscriptDocument> {
        self.inner.lock().await.get(id).cloned()
    }

    pub async fn active(&self) -> Option<TranscriptDocument> {
        self.inner.lock().await.active().cloned()
    }

    pub async fn active_id(&self) -> Option<String> {
        self.inner.lock().await.active_id().map(str::to_string)
    }

    pub async fn documents(&self) -> Vec<TranscriptDocument> {
        self.inner.lock().await.documents().to_vec()
    }

    pub async fn apply_mode(&self, mode: SummaryMode) {
        self.inner.lock().await.apply_mode(mode);
    }

    pub async fn set_instruction(&self, instruction: String) {
        self.inner.lock().await.set_instruction(instruction);
    }

    pub async fn instruction(&self) -> String {
        self.inner.lock().await.instruction().to_string()
    }

    pub async fn selected_mode(&self) -> Option<SummaryMode> {
        self.inner.lock().await.selected_mode()
    }

    pub async fn attach_summary(&self, id: &str, summary: String) -> bool {
        self.inner.lock().await.attach_summary(id, summary)
    }
}
