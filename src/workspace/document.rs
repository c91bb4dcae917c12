//! Transcript document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meeting category for a transcript document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Client Call")]
    ClientCall,
    #[serde(rename = "Team Sync")]
    TeamSync,
    #[serde(rename = "Project Review")]
    ProjectReview,
    #[serde(rename = "Strategy Meeting")]
    StrategyMeeting,
    #[serde(rename = "One-on-One")]
    OneOnOne,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ClientCall,
        Category::TeamSync,
        Category::ProjectReview,
        Category::StrategyMeeting,
        Category::OneOnOne,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientCall => "Client Call",
            Self::TeamSync => "Team Sync",
            Self::ProjectReview => "Project Review",
            Self::StrategyMeeting => "Strategy Meeting",
            Self::OneOnOne => "One-on-One",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-managed unit combining raw meeting text, metadata, and an
/// optional generated summary. Lives in process memory only.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptDocument {
    pub id: String,
    pub name: String,
    pub content: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TranscriptDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content: content.into(),
            category,
            summary: None,
            created_at: Utc::now(),
        }
    }

    /// Build a document from an uploaded plain-text file. The display name
    /// is the file name with a trailing `.txt` stripped.
    pub fn from_upload(file_name: &str, content: impl Into<String>) -> Self {
        let name = file_name.strip_suffix(".txt").unwrap_or(file_name);
        Self::new(name, content, Category::default())
    }
}
