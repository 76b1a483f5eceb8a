use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ConfigError;
use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;
use crate::views::{render_page, Outcome, PageView};

/// The ways a single analysis can fail.
#[derive(Debug, Error)]
pub enum CritiqueError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    RemoteCall(#[from] LlmError),
}

impl CritiqueError {
    /// Message shown in the page's output region.
    pub fn user_message(&self) -> String {
        match self {
            CritiqueError::Config(e) => e.to_string(),
            CritiqueError::Extraction(e @ ExtractionError::NoReadableContent) => e.to_string(),
            CritiqueError::Extraction(e) => format!("An error occurred: {e}"),
            CritiqueError::RemoteCall(e) => format!("An error occurred: {e}"),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`;
/// every variant renders the full page with the message in the output region.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Critique(#[from] CritiqueError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unreadable form submission: {0}")]
    Multipart(#[from] MultipartError),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Critique(e.into())
    }
}

impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Critique(e) => e.user_message(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Multipart(e) => format!("An error occurred: {e}"),
        }
    }
}

impl AppError {
    /// Renders the page with the error in the output region and `job_role`
    /// kept in the form.
    pub fn into_page(self, job_role: &str) -> Response {
        let (status, controls) = match &self {
            AppError::Critique(CritiqueError::Config(e)) => {
                tracing::error!("Configuration error: {e}");
                (StatusCode::SERVICE_UNAVAILABLE, false)
            }
            AppError::Critique(CritiqueError::Extraction(e)) => {
                tracing::warn!("Extraction failed: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, true)
            }
            AppError::Critique(CritiqueError::RemoteCall(e)) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::BAD_GATEWAY, true)
            }
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, true),
            AppError::Multipart(e) => {
                tracing::warn!("Multipart error: {e}");
                (StatusCode::BAD_REQUEST, true)
            }
        };

        let message = self.user_message();
        let page = render_page(&PageView {
            controls,
            job_role,
            outcome: Outcome::Error(&message),
        });

        (status, Html(page)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_page("")
    }
}

/// An error raised after the form was read, carrying the submitted role back
/// into the re-rendered page.
#[derive(Debug)]
pub struct FormError {
    pub error: AppError,
    pub job_role: String,
}

impl From<AppError> for FormError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            job_role: String::new(),
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        self.error.into_page(&self.job_role)
    }
}
