use crate::global;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub email: EmailSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub subject: String,
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 7227, // RCAP on a phone keypad
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: "llama3-8b-8192".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            base_url: "https://api.groq.com/openai/v1".to_string(),
        }
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            subject: "Meeting Summary".to_string(),
            base_url: "https://api.resend.com".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = global::config_file()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let settings = Self::default();
            settings.save_to(config_path)?;
            return Ok(settings);
        }

        let content =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let settings: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&global::config_file()?)
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

/// API credentials, read from the process environment once at startup.
///
/// Empty values are treated the same as unset ones so that an exported
/// but blank variable does not masquerade as a working credential.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub groq_api_key: Option<String>,
    pub resend_api_key: Option<String>,
    pub from_email: Option<String>,
}

pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const RESEND_API_KEY_VAR: &str = "RESEND_API_KEY";
pub const FROM_EMAIL_VAR: &str = "FROM_EMAIL";

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: read_env(GROQ_API_KEY_VAR),
            resend_api_key: read_env(RESEND_API_KEY_VAR),
            from_email: read_env(FROM_EMAIL_VAR),
        }
    }

    /// Fail fast when a required credential is absent, naming every
    /// missing variable instead of deferring the error to request time.
    pub fn require(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.groq_api_key.is_none() {
            missing.push(GROQ_API_KEY_VAR);
        }
        if self.resend_api_key.is_none() {
            missing.push(RESEND_API_KEY_VAR);
        }
        if self.from_email.is_none() {
            missing.push(FROM_EMAIL_VAR);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "missing required environment variables: {}",
                missing.join(", ")
            ))
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
