use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4";

/// Wire variant spoken with the call-initiation collaborator.
///
/// `Legacy` sends only the phone number and reads the new session id from `sid`.
/// `Current` sends the full profile and reads it from `session_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallProtocol {
    #[default]
    Legacy,
    Current,
}

impl CallProtocol {
    /// Response field carrying the session id minted by the collaborator.
    pub fn session_id_field(self) -> &'static str {
        match self {
            CallProtocol::Legacy => "sid",
            CallProtocol::Current => "session_id",
        }
    }
}

impl FromStr for CallProtocol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "v1" => Ok(CallProtocol::Legacy),
            "current" | "v2" => Ok(CallProtocol::Current),
            other => bail!("Unknown CALL_PROTOCOL '{other}' (expected 'legacy' or 'current')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Without it sessions live in process memory.
    pub database_url: Option<String>,
    pub profile_api_url: String,
    pub delivery_api_url: String,
    pub call_api_url: String,
    pub call_protocol: CallProtocol,
    pub openai_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub http_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            profile_api_url: require_env("PROFILE_API_URL")?,
            delivery_api_url: require_env("DELIVERY_API_URL")?,
            call_api_url: require_env("CALL_API_URL")?,
            call_protocol: optional_env("CALL_PROTOCOL")
                .map(|v| v.parse::<CallProtocol>())
                .transpose()?
                .unwrap_or_default(),
            openai_api_key: require_env("OPENAI_API_KEY")?,
            llm_api_url: optional_env("LLM_API_URL")
                .unwrap_or_else(|| DEFAULT_LLM_API_URL.to_string()),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            http_timeout: Duration::from_secs(
                std::env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
