use async_trait::async_trait;
use recap::summarize::{SummarizeError, SummaryBackend};

/// Summarizer that always replies with a fixed string.
pub struct StaticSummarizer {
    pub reply: String,
}

impl StaticSummarizer {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

#[async_trait]
impl SummaryBackend for StaticSummarizer {
    async fn summarize(&self, _: &str, _: &str) -> Result<String, SummarizeError> {
        Ok(self.reply.clone())
    }
}

/// Summarizer that always fails like a broken upstream.
pub struct FailingSummarizer;

#[async_trait]
impl SummaryBackend for FailingSummarizer {
    async fn summarize(&self, _: &str, _: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::Api {
            status: 503,
            message: "completion service unavailable".to_string(),
        })
    }
}
