//! Axum route handlers for the analysis page.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::info;

use crate::critique::critique_resume;
use crate::errors::{AppError, FormError};
use crate::extraction::UploadedDocument;
use crate::state::AppState;
use crate::views::{render_page, Outcome, PageView};

const RESUME_FIELD: &str = "resume";
const JOB_ROLE_FIELD: &str = "job_role";

/// Fields collected from the upload form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    document: Option<UploadedDocument>,
    job_role: Option<String>,
}

/// GET /
///
/// Without an API key the page shows the configuration error and no controls.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.provider()?;

    Ok(Html(render_page(&PageView {
        controls: true,
        job_role: "",
        outcome: Outcome::Empty,
    })))
}

/// POST /analyze
///
/// Extracts the uploaded resume, requests one critique, and renders it.
/// Failures after the form is read keep the submitted role in the page.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, FormError> {
    let provider = state.provider().map_err(AppError::from)?;

    let AnalyzeForm { document, job_role } = read_form(multipart).await?;
    let job_role = job_role.as_deref();

    let outcome = match document {
        Some(document) => critique_resume(provider.as_ref(), document, job_role)
            .await
            .map_err(AppError::from),
        None => Err(AppError::Validation(
            "Please upload your resume (PDF or TXT) to analyze.".to_string(),
        )),
    };
    let critique = outcome.map_err(|error| FormError {
        error,
        job_role: job_role.unwrap_or_default().to_string(),
    })?;

    Ok(Html(render_page(&PageView {
        controls: true,
        job_role: job_role.unwrap_or(""),
        outcome: Outcome::Critique(critique.as_str()),
    })))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                let content = field.bytes().await?;

                // Browsers send an empty, unnamed part when no file was chosen
                if file_name.is_empty() && content.is_empty() {
                    continue;
                }

                info!(
                    "Received upload {file_name:?} ({} bytes, content type {:?})",
                    content.len(),
                    content_type
                );
                form.document = Some(UploadedDocument::new(
                    file_name,
                    content_type.as_deref(),
                    content,
                ));
            }
            Some(JOB_ROLE_FIELD) => {
                form.job_role = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(form)
}
