//! Owned, in-memory transcript store.
//!
//! Holds the document list, the active selection, and the pending
//! summarization instruction. Invariants:
//! - at most one document is active at a time
//! - an active id always references an existing document
//! - deleting the active document promotes the first remaining one,
//!   or clears the selection when none remain
//!
//! Nothing here is persisted; the store is reinitialized empty on start.

use super::document::{Category, TranscriptDocument};
use super::modes::{SummaryMode, DEFAULT_INSTRUCTION};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Transcript {0} not found")]
    NotFound(String),
}

/// Partial update for a document. Only supplied fields are merged.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct DocumentPatch {
    pub name: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub summary: Option<String>,
}

#[derive(Debug)]
pub struct Workspace {
    documents: Vec<TranscriptDocument>,
    active_id: Option<String>,
    instruction: String,
    selected_mode: Option<SummaryMode>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            instruction: DEFAULT_INSTRUCTION.to_string(),
            selected_mode: None,
        }
    }
}

impl Workspace {
    /// Append a manually created document. Becomes active when nothing is.
    pub fn add_manual(
        &mut self,
        name: Option<String>,
        content: Option<String>,
        category: Option<Category>,
    ) -> TranscriptDocument {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Meeting {}", self.documents.len() + 1));
        let document = TranscriptDocument::new(
            name,
            content.unwrap_or_default(),
            category.unwrap_or_default(),
        );
        self.push(document)
    }

    /// Append a document imported from an uploaded plain-text file.
    pub fn import_file(&mut self, file_name: &str, content: String) -> TranscriptDocument {
        let document = TranscriptDocument::from_upload(file_name, content);
        self.push(document)
    }

    fn push(&mut self, document: TranscriptDocument) -> TranscriptDocument {
        if self.active_id.is_none() {
            self.active_id = Some(document.id.clone());
        }
        self.documents.push(document.clone());
        document
    }

    /// Merge the supplied fields into the matching document.
    pub fn update(
        &mut self,
        id: &str,
        patch: DocumentPatch,
    ) -> Result<TranscriptDocument, StoreError> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            document.name = name;
        }
        if let Some(content) = patch.content {
            document.content = content;
        }
        if let Some(category) = patch.category {
            document.category = category;
        }
        if let Some(summary) = patch.summary {
            document.summary = Some(summary);
        }

        Ok(document.clone())
    }

    /// Remove a document, re-selecting per the active-id invariant.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        self.documents.remove(index);

        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.documents.first().map(|d| d.id.clone());
        }

        Ok(())
    }

    /// Set the active document. Fails when the id does not exist, so a
    /// dangling active id can never be introduced through this path.
    pub fn select(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.documents.iter().any(|d| d.id == id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TranscriptDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn active(&self) -> Option<&TranscriptDocument> {
        self.active_id
            .as_deref()
            .and_then(|id| self.documents.iter().find(|d| d.id == id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn documents(&self) -> &[TranscriptDocument] {
        &self.documents
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Fill the instruction from a fixed mode. Touches no document.
    pub fn apply_mode(&mut self, mode: SummaryMode) {
        self.instruction = mode.instruction().to_string();
        self.selected_mode = Some(mode);
    }

    /// Set a free-text instruction, clearing any selected mode.
    pub fn set_instruction(&mut self, instruction: String) {
        self.instruction = instruction;
        self.selected_mode = None;
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn selected_mode(&self) -> Option<SummaryMode> {
        self.selected_mode
    }

    /// Attach a generated summary to the document it was requested for.
    /// Returns false when that document no longer exists, in which case
    /// the result is discarded rather than applied to a different one.
    pub fn attach_summary(&mut self, id: &str, summary: String) -> bool {
        match self.documents.iter_mut().find(|d| d.id == id) {
            Some(document) => {
                document.summary = Some(summary);
                true
            }
            None => false,
        }
    }
}
