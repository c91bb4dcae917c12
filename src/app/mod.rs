use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::api::{ApiServer, AppState};
use crate::config::{Credentials, Settings};
use crate::deliver::ResendClient;
use crate::summarize::GroqClient;
use crate::workspace::WorkspaceHandle;

pub async fn run_service(port_override: Option<u16>) -> Result<()> {
    info!("Starting recap service");

    let settings = Settings::load()?;
    let credentials = Credentials::from_env();
    credentials.require()?;

    let state = build_state(&settings, &credentials);
    let port = port_override.unwrap_or(settings.server.port);

    ApiServer::new(state, port).start().await
}

/// Assemble shared state from settings and credentials. Clients are only
/// constructed for credentials that are present; `run_service` has already
/// required all of them, but tests build degraded states through this same
/// path.
pub fn build_state(settings: &Settings, credentials: &Credentials) -> AppState {
    AppState {
        workspace: WorkspaceHandle::default(),
        summarizer: credentials
            .groq_api_key
            .as_deref()
            .map(|key| Arc::new(GroqClient::new(key, &settings.llm)) as _),
        mailer: credentials
            .resend_api_key
            .as_deref()
            .map(|key| Arc::new(ResendClient::new(key, &settings.email)) as _),
        sender: credentials.from_email.clone(),
        subject: settings.email.subject.clone(),
    }
}
