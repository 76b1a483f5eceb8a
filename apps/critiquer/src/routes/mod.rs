pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::critique::handlers;
use crate::state::AppState;

/// Largest accepted analyze request body; replaces axum's 2 MB default.
pub const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        .route(
            "/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::ConfigError;
    use crate::llm_client::mock::MockProvider;

    const BOUNDARY: &str = "critiquer-test-boundary";

    fn multipart_body(file: Option<(&str, &str, &[u8])>, job_role: Option<&str>) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some((file_name, content_type, content)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"resume\"; \
                     filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        if let Some(role) = job_role {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"job_role\"\r\n\r\n{role}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn configured(provider: &Arc<MockProvider>) -> Router {
        build_router(AppState::new(provider.clone()))
    }

    fn unconfigured() -> Router {
        build_router(AppState::unconfigured(ConfigError::MissingApiKey(
            "GROQ_API_KEY",
        )))
    }

    #[tokio::test]
    async fn test_index_shows_upload_controls() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let response = configured(&provider)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("AI Resume Critiquer"));
        assert!(page.contains("<form"));
        assert!(page.contains("Analyze Resume"));
    }

    #[tokio::test]
    async fn test_missing_api_key_disables_controls() {
        let response = unconfigured()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let page = body_text(response).await;
        assert!(page.contains("Groq API key not found. Please set GROQ_API_KEY in .env file."));
        assert!(!page.contains("<form"));
        assert!(!page.contains("Analyze Resume"));
    }

    #[tokio::test]
    async fn test_analyze_without_api_key_reports_config_error() {
        let body = multipart_body(Some(("resume.txt", "text/plain", "Jane Roe".as_bytes())), None);
        let response = unconfigured().oneshot(analyze_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let page = body_text(response).await;
        assert!(page.contains("Groq API key not found"));
        assert!(!page.contains("<form"));
    }

    #[tokio::test]
    async fn test_analyze_renders_critique_under_heading() {
        let provider = Arc::new(MockProvider::replying(
            "Consider quantifying your achievements,",
        ));
        let body = multipart_body(
            Some((
                "resume.txt",
                "text/plain",
                "John Doe\nSoftware Engineer\n5 years experience".as_bytes(),
            )),
            Some("Data Scientist"),
        );

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        let heading = page.find("📊 Resume Analysis").expect("analysis heading");
        let critique = page
            .find("<p>Consider quantifying your achievements,</p>")
            .expect("critique text");
        assert!(heading < critique);
        assert!(page.contains("value=\"Data Scientist\""));

        assert_eq!(provider.call_count(), 1);
        let prompt = provider.requests()[0].messages[1].content.clone();
        assert!(prompt.contains("Improvements for Data Scientist"));
        assert!(prompt.contains("John Doe\nSoftware Engineer\n5 years experience"));
    }

    #[tokio::test]
    async fn test_zero_byte_upload_reports_no_readable_content() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let body = multipart_body(Some(("empty.txt", "text/plain", "".as_bytes())), None);

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let page = body_text(response).await;
        assert!(page.contains("The uploaded file has no readable content."));
        assert!(page.contains("<form"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_analysis_keeps_submitted_role() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let body = multipart_body(Some(("e.txt", "text/plain", "".as_bytes())), Some("Data Scientist"));

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let page = body_text(response).await;
        assert!(page.contains("The uploaded file has no readable content."));
        assert!(page.contains("value=\"Data Scientist\""));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_pdf_reports_generic_error() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let body = multipart_body(
            Some(("resume.pdf", "application/pdf", "definitely not a pdf".as_bytes())),
            Some("SRE"),
        );

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let page = body_text(response).await;
        assert!(page.contains("An error occurred: could not open PDF document"));
        assert!(page.contains("<form"));
        assert!(page.contains("value=\"SRE\""));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upload_above_default_body_limit_is_accepted() {
        let provider = Arc::new(MockProvider::replying("Trim it down."));
        let resume = "Built distributed systems. ".repeat(120_000);
        let body = multipart_body(Some(("resume.txt", "text/plain", resume.as_bytes())), None);
        assert!(body.len() > 3 * 1024 * 1024);

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_without_file_asks_for_upload() {
        let provider = Arc::new(MockProvider::replying("unused"));
        let body = multipart_body(None, Some("SRE"));

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let page = body_text(response).await;
        assert!(page.contains("Please upload your resume"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_shown_as_generic_error() {
        let provider = Arc::new(MockProvider::failing("model overloaded"));
        let body = multipart_body(Some(("resume.txt", "text/plain", "Jane Roe".as_bytes())), None);

        let response = configured(&provider)
            .oneshot(analyze_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let page = body_text(response).await;
        assert!(page.contains("An error occurred: "));
        assert!(page.contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let response = unconfigured()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["configured"], false);
    }
}
