use anyhow::{bail, Context, Result};

use crate::eligibility::checker::CheckerConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if live mode is requested without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Serve canned responses instead of calling the LLM.
    pub use_mock_responses: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let use_mock_responses = match std::env::var("USE_MOCK_RESPONSES") {
            Ok(raw) => parse_flag(&raw).context("USE_MOCK_RESPONSES must be true or false")?,
            Err(_) => api_key.is_none(),
        };

        let anthropic_api_key = if use_mock_responses {
            api_key.unwrap_or_default()
        } else {
            api_key.context(
                "Required environment variable 'ANTHROPIC_API_KEY' is not set (or set USE_MOCK_RESPONSES=true)",
            )?
        };

        Ok(Config {
            anthropic_api_key,
            use_mock_responses,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The explicit option object handed to every LLM-backed service.
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            use_mock_responses: self.use_mock_responses,
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized boolean value '{other}'"),
    }
}
