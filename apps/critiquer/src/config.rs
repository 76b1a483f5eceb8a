use anyhow::{Context, Result};
use thiserror::Error;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Raised when the service starts without the credentials it needs to analyze resumes.
/// The server still comes up so the error can be shown to the user.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Groq API key not found. Please set {0} in .env file.")]
    MissingApiKey(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            groq_api_key: lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty()),
            groq_base_url: lookup("GROQ_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.groq_api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))
    }
}
