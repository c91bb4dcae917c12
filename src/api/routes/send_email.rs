//! Delivery proxy endpoint.
//!
//! `POST /api/send-email` sends one message to all listed recipients via
//! the hosted email service, rendering the summary into an HTML body.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::deliver::{render_summary_html, OutboundEmail};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/send-email", post(send_email))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct SendEmailReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none", rename = "messageId")]
    message_id: Option<String>,
}

/// POST /api/send-email - Email a summary to a list of recipients.
async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<SendEmailReply>> {
    let summary = body
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation("Summary is required"))?;

    let emails: Vec<String> = body
        .get("emails")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if emails.is_empty() {
        return Err(ApiError::validation("Email addresses are required"));
    }

    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| ApiError::configuration("RESEND_API_KEY not configured"))?;
    let from = state
        .sender
        .clone()
        .ok_or_else(|| ApiError::configuration("FROM_EMAIL not configured"))?;

    let email = OutboundEmail {
        from,
        to: emails,
        subject: state.subject.clone(),
        html: render_summary_html(summary),
    };

    info!("Delivery requested for {} recipients", email.to.len());

    let message_id = mailer.send(&email).await.map_err(|e| {
        error!("Error sending email: {}", e);
        ApiError::upstream("Failed to send email")
    })?;

    Ok(Json(SendEmailReply {
        success: true,
        message_id,
    }))
}
