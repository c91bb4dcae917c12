//! Groq chat-completions client (OpenAI-compatible API).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::LlmSettings;

use super::{compose_prompt, SummarizeError, SummaryBackend, NO_SUMMARY_FALLBACK};

pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>, settings: &LlmSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_completion_request(
        &self,
        prompt: impl Into<String>,
    ) -> Result<CompletionResponse, SummarizeError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": prompt.into(),
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[async_trait]
impl SummaryBackend for GroqClient {
    async fn summarize(
        &self,
        transcript: &str,
        instruction: &str,
    ) -> Result<String, SummarizeError> {
        let prompt = compose_prompt(instruction, transcript);

        let response = self
            .send_completion_request(prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate summary"))?;

        let summary = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());

        Ok(summary)
    }
}
