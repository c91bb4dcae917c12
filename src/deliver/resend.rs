//! Resend API client for sending transactional emails.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EmailSettings;

use super::{DeliverError, MailBackend, OutboundEmail};

pub struct ResendClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Request payload for sending an email via Resend.
#[derive(Debug, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Response from the Resend API.
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: Option<String>,
}

impl ResendClient {
    pub fn new(api_key: impl Into<String>, settings: &EmailSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: settings.base_url.clone(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_email(
        &self,
        request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, DeliverError> {
        info!("Sending email to {} recipients", request.to.len());
        debug!("Email subject: {}", request.subject);

        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(DeliverError::Api { status, message });
        }

        let response = resp.json::<SendEmailResponse>().await?;

        info!("Email sent, message id: {:?}", response.id);

        Ok(response)
    }
}

#[async_trait]
impl MailBackend for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, DeliverError> {
        let request = SendEmailRequest {
            from: email.from.clone(),
            to: email.to.clone(),
            subject: email.subject.clone(),
            html: email.html.clone(),
        };

        let response = self
            .send_email(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to send email"))?;

        Ok(response.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> OutboundEmail {
        OutboundEmail {
            from: "summaries@example.com".to_string(),
            to: vec!["a@x.com".to_string(), "b@y.com".to_string()],
            subject: "Meeting Summary".to_string(),
            html: "<h2>Meeting Summary</h2>".to_string(),
        }
    }

    fn test_client(base_url: &str) -> ResendClient {
        ResendClient::new("re_test", &EmailSettings::default()).with_base_url(base_url)
    }

    #[test]
    fn test_send_email_request_serialization() {
        let request = SendEmailRequest {
            from: "summaries@example.com".to_string(),
            to: vec!["a@x.com".to_string()],
            subject: "Meeting Summary".to_string(),
            html: "<p>body</p>".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from"], "summaries@example.com");
        assert_eq!(json["to"][0], "a@x.com");
        assert_eq!(json["subject"], "Meeting Summary");
    }

    #[tokio::test]
    async fn test_send_success_returns_message_id() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "from": "summaries@example.com",
                "to": ["a@x.com", "b@y.com"],
                "subject": "Meeting Summary",
                "html": "<h2>Meeting Summary</h2>",
            })))
            .with_status(200)
            .with_body(r#"{"id":"msg_123"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let message_id = client.send(&test_email()).await.unwrap();

        assert_eq!(message_id.as_deref(), Some("msg_123"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_delivery_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/emails")
            .with_status(422)
            .with_body(r#"{"message":"invalid sender"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.send(&test_email()).await.unwrap_err();

        match err {
            DeliverError::Api { status, message } => {
                assert_eq!(status, 422);
                assert!(message.contains("invalid sender"));
            }
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }
}
