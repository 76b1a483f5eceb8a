use std::sync::Arc;

use crate::config::ConfigError;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The completion backend, or the reason one could not be built at startup.
    provider: Result<Arc<dyn CompletionProvider>, ConfigError>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider: Ok(provider),
        }
    }

    /// State for a service started without credentials: every page reports `error`.
    pub fn unconfigured(error: ConfigError) -> Self {
        Self {
            provider: Err(error),
        }
    }

    pub fn provider(&self) -> Result<Arc<dyn CompletionProvider>, ConfigError> {
        self.provider.clone()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_ok()
    }
}
