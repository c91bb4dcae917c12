//! Summary delivery via a hosted transactional email API.

pub mod resend;

pub use resend::ResendClient;

use async_trait::async_trait;

/// Disclaimer appended to every delivered summary.
pub const DISCLAIMER: &str = "This summary was generated using AI and may require review.";

#[derive(Debug, thiserror::Error)]
pub enum DeliverError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// One outbound message, already rendered.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Trait for sending a rendered summary email, decoupled from the
/// concrete delivery provider. Returns the provider's opaque message id
/// when one is reported.
#[async_trait]
pub trait MailBackend: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, DeliverError>;
}

/// Render a summary into the delivery HTML body: escaped text with
/// newlines converted to line breaks, followed by the fixed disclaimer.
pub fn render_summary_html(summary: &str) -> String {
    let escaped = escape_html(summary).replace('\n', "<br>");
    format!(
        "<h2>Meeting Summary</h2>\
         <div style=\"white-space: pre-wrap; font-family: Arial, sans-serif; line-height: 1.6;\">{escaped}</div>\
         <hr>\
         <p style=\"color: #666; font-size: 12px;\">{DISCLAIMER}</p>"
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
