//! Outbound flow orchestrator for the workspace.
//!
//! Drives the two composite operations on the active document:
//! generate a summary via the completion backend, and email a summary via
//! the delivery backend. Each outbound call is tagged with the id of the
//! document it targets; a summarization result whose document has been
//! deleted while the call was in flight is discarded, never applied to
//! whatever happens to be active when the response arrives.
//!
//! All dependencies are injected via constructor. No retries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::deliver::{render_summary_html, MailBackend, OutboundEmail};
use crate::summarize::SummaryBackend;

use super::document::TranscriptDocument;
use super::modes::DEFAULT_INSTRUCTION;
use super::WorkspaceHandle;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Please enter or upload a transcript")]
    NoTranscriptSelected,
    #[error("The selected transcript has no content")]
    EmptyContent,
    #[error("Please generate a summary first")]
    EmptySummary,
    #[error("Please enter recipient email addresses")]
    NoRecipients,
    #[error("{0} not configured")]
    NotConfigured(&'static str),
    #[error("{0}")]
    Upstream(String),
}

/// Outcome of summarizing the active document. `applied` is false when
/// the target document was deleted mid-call and the result was discarded.
#[derive(Debug, serde::Serialize)]
pub struct GeneratedSummary {
    pub document_id: String,
    pub summary: String,
    pub applied: bool,
}

/// Outcome of a successful delivery.
#[derive(Debug, serde::Serialize)]
pub struct DeliveryReceipt {
    #[serde(skip_serializing_if = "Option::is_none", rename = "messageId")]
    pub message_id: Option<String>,
    pub recipients: Vec<String>,
}

pub struct SummaryMachine {
    workspace: WorkspaceHandle,
    summarizer: Option<Arc<dyn SummaryBackend>>,
    mailer: Option<Arc<dyn MailBackend>>,
    sender: Option<String>,
    subject: String,
}

impl SummaryMachine {
    pub fn new(
        workspace: WorkspaceHandle,
        summarizer: Option<Arc<dyn SummaryBackend>>,
        mailer: Option<Arc<dyn MailBackend>>,
        sender: Option<String>,
        subject: String,
    ) -> Self {
        Self {
            workspace,
            summarizer,
            mailer,
            sender,
            subject,
        }
    }

    /// Summarize the active document with the pending instruction.
    pub async fn generate_summary(&self) -> Result<GeneratedSummary, FlowError> {
        let document = self
            .workspace
            .active()
            .await
            .ok_or(FlowError::NoTranscriptSelected)?;

        let content = document.content.trim().to_string();
        if content.is_empty() {
            return Err(FlowError::EmptyContent);
        }

        let instruction = {
            let pending = self.workspace.instruction().await;
            let trimmed = pending.trim();
            if trimmed.is_empty() {
                DEFAULT_INSTRUCTION.to_string()
            } else {
                trimmed.to_string()
            }
        };

        let summarizer = self
            .summarizer
            .as_ref()
            .ok_or(FlowError::NotConfigured("GROQ_API_KEY"))?;

        info!("Generating summary for transcript {}", document.id);

        let summary = summarizer
            .summarize(&content, &instruction)
            .await
            .map_err(|e| FlowError::Upstream(e.to_string()))?;

        let applied = self
            .workspace
            .attach_summary(&document.id, summary.clone())
            .await;

        if !applied {
            warn!(
                "Transcript {} was deleted mid-call, discarding summary",
                document.id
            );
        }

        Ok(GeneratedSummary {
            document_id: document.id,
            summary,
            applied,
        })
    }

    /// Email the active document's summary to a comma-separated recipient
    /// list.
    pub async fn send_summary(&self, recipients: &str) -> Result<DeliveryReceipt, FlowError> {
        let document = self
            .workspace
            .active()
            .await
            .ok_or(FlowError::NoTranscriptSelected)?;

        let has_summary = document
            .summary
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if !has_summary {
            return Err(FlowError::EmptySummary);
        }

        let to = split_recipients(recipients);
        if to.is_empty() {
            return Err(FlowError::NoRecipients);
        }

        let mailer = self
            .mailer
            .as_ref()
            .ok_or(FlowError::NotConfigured("RESEND_API_KEY"))?;
        let from = self
            .sender
            .clone()
            .ok_or(FlowError::NotConfigured("FROM_EMAIL"))?;

        let email = OutboundEmail {
            from,
            to: to.clone(),
            subject: self.subject.clone(),
            html: render_summary_html(&compose_email_body(&document)),
        };

        info!(
            "Sending summary of transcript {} to {} recipients",
            document.id,
            to.len()
        );

        let message_id = mailer
            .send(&email)
            .await
            .map_err(|e| FlowError::Upstream(e.to_string()))?;

        Ok(DeliveryReceipt {
            message_id,
            recipients: to,
        })
    }
}

/// Split a comma-separated recipient field, trimming whitespace and
/// dropping empty segments.
pub fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Compose the delivered body from the document's name, category, and
/// summary.
pub fn compose_email_body(document: &TranscriptDocument) -> String {
    let summary = document.summary.as_deref().unwrap_or_default().trim();
    format!(
        "{} ({})\n\n{}",
        document.name, document.category, summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliver::DeliverError;
    use crate::summarize::SummarizeError;
    use crate::workspace::Category;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedSummarizer {
        reply: String,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl FixedSummarizer {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SummaryBackend for FixedSummarizer {
        async fn summarize(
            &self,
            transcript: &str,
            instruction: &str,
        ) -> Result<String, SummarizeError> {
            self.seen
                .lock()
                .unwrap()
                .push((transcript.to_string(), instruction.to_string()));
            Ok(self.reply.clone())
        }
    }

    /// Deletes its target document before replying, to exercise the
    /// stale-response guard.
    struct DeletingSummarizer {
        workspace: WorkspaceHandle,
        target: String,
    }

    #[async_trait]
    impl SummaryBackend for DeletingSummarizer {
        async fn summarize(&self, _: &str, _: &str) -> Result<String, SummarizeError> {
            self.workspace.delete(&self.target).await.unwrap();
            Ok("late summary".to_string())
        }
    }

    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            })
        }
    }

    #[async_trait]
    impl MailBackend for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, DeliverError> {
            if self.fail {
                return Err(DeliverError::Api {
                    status: 500,
                    message: "delivery failed".to_string(),
                });
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(Some("msg_123".to_string()))
        }
    }

    fn machine_with(
        workspace: WorkspaceHandle,
        summarizer: Option<Arc<dyn SummaryBackend>>,
        mailer: Option<Arc<dyn MailBackend>>,
    ) -> SummaryMachine {
        SummaryMachine::new(
            workspace,
            summarizer,
            mailer,
            Some("summaries@example.com".to_string()),
            "Meeting Summary".to_string(),
        )
    }

    #[tokio::test]
    async fn test_generate_applies_summary_to_active_document() {
        let workspace = WorkspaceHandle::default();
        let doc = workspace
            .add_manual(None, Some("Alice: ship Friday".into()), None)
            .await;

        let summarizer = FixedSummarizer::new("Decision: ship Friday.");
        let machine = machine_with(workspace.clone(), Some(summarizer.clone()), None);

        let result = machine.generate_summary().await.unwrap();
        assert!(result.applied);
        assert_eq!(result.document_id, doc.id);
        assert_eq!(result.summary, "Decision: ship Friday.");
        assert_eq!(
            workspace.get(&doc.id).await.unwrap().summary.as_deref(),
            Some("Decision: ship Friday.")
        );

        let seen = summarizer.seen.lock().unwrap();
        assert_eq!(seen[0].0, "Alice: ship Friday");
        assert_eq!(seen[0].1, DEFAULT_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_generate_uses_pending_instruction() {
        let workspace = WorkspaceHandle::default();
        workspace
            .add_manual(None, Some("transcript".into()), None)
            .await;
        workspace
            .set_instruction("Focus on blockers".into())
            .await;

        let summarizer = FixedSummarizer::new("ok");
        let machine = machine_with(workspace, Some(summarizer.clone()), None);
        machine.generate_summary().await.unwrap();

        assert_eq!(summarizer.seen.lock().unwrap()[0].1, "Focus on blockers");
    }

    #[tokio::test]
    async fn test_generate_blank_instruction_falls_back_to_default() {
        let workspace = WorkspaceHandle::default();
        workspace
            .add_manual(None, Some("transcript".into()), None)
            .await;
        workspace.set_instruction("   ".into()).await;

        let summarizer = FixedSummarizer::new("ok");
        let machine = machine_with(workspace, Some(summarizer.clone()), None);
        machine.generate_summary().await.unwrap();

        assert_eq!(summarizer.seen.lock().unwrap()[0].1, DEFAULT_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_generate_without_documents() {
        let machine = machine_with(
            WorkspaceHandle::default(),
            Some(FixedSummarizer::new("ok")),
            None,
        );
        let err = machine.generate_summary().await.unwrap_err();
        assert!(matches!(err, FlowError::NoTranscriptSelected));
    }

    #[tokio::test]
    async fn test_generate_with_whitespace_content() {
        let workspace = WorkspaceHandle::default();
        workspace.add_manual(None, Some("   \n ".into()), None).await;

        let machine = machine_with(workspace, Some(FixedSummarizer::new("ok")), None);
        let err = machine.generate_summary().await.unwrap_err();
        assert!(matches!(err, FlowError::EmptyContent));
    }

    #[tokio::test]
    async fn test_generate_without_backend_is_configuration_error() {
        let workspace = WorkspaceHandle::default();
        workspace.add_manual(None, Some("text".into()), None).await;

        let machine = machine_with(workspace, None, None);
        let err = machine.generate_summary().await.unwrap_err();
        assert!(matches!(err, FlowError::NotConfigured("GROQ_API_KEY")));
    }

    #[tokio::test]
    async fn test_generate_discards_result_for_deleted_document() {
        let workspace = WorkspaceHandle::default();
        let doc = workspace
            .add_manual(None, Some("text".into()), None)
            .await;

        let summarizer = Arc::new(DeletingSummarizer {
            workspace: workspace.clone(),
            target: doc.id.clone(),
        });
        let machine = machine_with(workspace.clone(), Some(summarizer), None);

        let result = machine.generate_summary().await.unwrap();
        assert!(!result.applied);
        assert!(workspace.get(&doc.id).await.is_none());
    }

    async fn workspace_with_summary() -> (WorkspaceHandle, TranscriptDocument) {
        let workspace = WorkspaceHandle::default();
        let doc = workspace
            .add_manual(
                Some("Standup".into()),
                Some("text".into()),
                Some(Category::TeamSync),
            )
            .await;
        workspace
            .attach_summary(&doc.id, "Everyone is on track.".into())
            .await;
        let doc = workspace.get(&doc.id).await.unwrap();
        (workspace, doc)
    }

    #[tokio::test]
    async fn test_send_composes_body_and_reports_receipt() {
        let (workspace, _) = workspace_with_summary().await;
        let mailer = RecordingMailer::new();
        let machine = machine_with(workspace, None, Some(mailer.clone()));

        let receipt = machine
            .send_summary("a@x.com, b@y.com")
            .await
            .unwrap();

        assert_eq!(receipt.message_id.as_deref(), Some("msg_123"));
        assert_eq!(receipt.recipients, vec!["a@x.com", "b@y.com"]);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].from, "summaries@example.com");
        assert_eq!(sent[0].subject, "Meeting Summary");
        assert!(sent[0]
            .html
            .contains("Standup (Team Sync)<br><br>Everyone is on track."));
    }

    #[tokio::test]
    async fn test_send_without_summary() {
        let workspace = WorkspaceHandle::default();
        workspace.add_manual(None, Some("text".into()), None).await;

        let machine = machine_with(workspace, None, Some(RecordingMailer::new()));
        let err = machine.send_summary("a@x.com").await.unwrap_err();
        assert!(matches!(err, FlowError::EmptySummary));
    }

    #[tokio::test]
    async fn test_send_without_recipients() {
        let (workspace, _) = workspace_with_summary().await;
        let machine = machine_with(workspace, None, Some(RecordingMailer::new()));

        let err = machine.send_summary(" , ,").await.unwrap_err();
        assert!(matches!(err, FlowError::NoRecipients));
    }

    #[tokio::test]
    async fn test_send_upstream_failure() {
        let (workspace, _) = workspace_with_summary().await;
        let machine = machine_with(workspace, None, Some(RecordingMailer::failing()));

        let err = machine.send_summary("a@x.com").await.unwrap_err();
        assert!(matches!(err, FlowError::Upstream(_)));
    }

    #[test]
    fn test_split_recipients_trims_and_drops_empties() {
        assert_eq!(
            split_recipients("a@x.com, b@y.com"),
            vec!["a@x.com", "b@y.com"]
        );
        assert_eq!(
            split_recipients("  a@x.com ,, , b@y.com ,"),
            vec!["a@x.com", "b@y.com"]
        );
        assert!(split_recipients("").is_empty());
        assert!(split_recipients(" , ").is_empty());
    }

    #[test]
    fn test_compose_email_body() {
        let mut doc = TranscriptDocument::new("Standup", "text", Category::TeamSync);
        doc.summary = Some("  Everyone is on track.\n".into());
        assert_eq!(
            compose_email_body(&doc),
            "Standup (Team Sync)\n\nEveryone is on track."
        );
    }
}
