use async_trait::async_trait;
use recap::deliver::{DeliverError, MailBackend, OutboundEmail};
use std::sync::Mutex;

/// Mailer that records every message and reports a fixed id.
pub struct StaticMailer {
    pub message_id: Option<String>,
    pub sent: Mutex<Vec<OutboundEmail>>,
}

impl StaticMailer {
    pub fn new(message_id: Option<&str>) -> Self {
        Self {
            message_id: message_id.map(str::to_string),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MailBackend for StaticMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, DeliverError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(self.message_id.clone())
    }
}

/// Mailer that always fails like a broken upstream.
pub struct FailingMailer;

#[async_trait]
impl MailBackend for FailingMailer {
    async fn send(&self, _: &OutboundEmail) -> Result<Option<String>, DeliverError> {
        Err(DeliverError::Api {
            status: 500,
            message: "delivery service unavailable".to_string(),
        })
    }
}
