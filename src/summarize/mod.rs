//! Transcript summarization via a hosted chat-completion API.

pub mod groq;

pub use groq::GroqClient;

use async_trait::async_trait;

/// Placeholder returned when the model produces no content.
pub const NO_SUMMARY_FALLBACK: &str = "No summary generated";

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Trait for generating a summary of a transcript under an instruction,
/// decoupled from the concrete completion provider.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, SummarizeError>;
}

/// Compose the single prompt submitted to the completion model.
pub fn compose_prompt(instruction: &str, transcript: &str) -> String {
    format!(
        "{instruction}\n\nMeeting Transcript:\n{transcript}\n\n\
         Please provide a well-structured summary based on the instruction above."
    )
}
