//! Resume critique: extraction → prompt → one completion call.

use tracing::info;

use crate::errors::CritiqueError;
use crate::extraction::{extract_text, UploadedDocument};
use crate::llm_client::CompletionProvider;

pub mod handlers;
pub mod prompts;
pub mod request;

pub use request::CritiqueRequest;

/// The model's free-text feedback, shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CritiqueResult(String);

impl CritiqueResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Runs the whole pipeline for one upload.
///
/// Extraction failures return before the provider is called.
pub async fn critique_resume(
    provider: &dyn CompletionProvider,
    document: UploadedDocument,
    job_role: Option<&str>,
) -> Result<CritiqueResult, CritiqueError> {
    let text = extract_text(document)?;
    let request = CritiqueRequest::new(&text, job_role);

    info!(
        "Requesting critique ({} chars, role: {})",
        text.as_str().chars().count(),
        request.job_role().unwrap_or("none")
    );
    let critique = provider.complete(&request.to_chat_request()).await?;
    info!("Critique received ({} chars)", critique.chars().count());

    Ok(CritiqueResult(critique))
}
