pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::{handle_analyze_resume, MAX_UPLOAD_BODY_BYTES};
use crate::email::handlers::{handle_draft_email, handle_list_templates};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analyzer
        .route(
            "/api/utilities/resume-analyzer",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        // Email drafting
        .route(
            "/api/utilities/email-template-generator",
            post(handle_draft_email),
        )
        .route(
            "/api/utilities/email-template-generator/templates",
            get(handle_list_templates),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::schema::SchemaContract;
    use crate::llm_client::testing::ScriptedBackend;

    const BOUNDARY: &str = "docforge-test-boundary";

    fn app(backend: ScriptedBackend) -> Router {
        build_router(AppState {
            llm: Arc::new(backend),
            schema: Arc::new(SchemaContract::feedback()),
        })
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, content_type, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyzer_request(body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/utilities/resume-analyzer")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn acme_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("companyName", "Acme"),
            ("jobTitle", "Engineer"),
            ("jobDescription", "Build things"),
        ]
    }

    fn fallback_section(key: &str) -> Value {
        json!({
            "score": 0,
            "tips": [{ "kind": "improvement", "statement": format!("Unable to analyze {key}.") }]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(ScriptedBackend::empty())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "scripted");
    }

    #[tokio::test]
    async fn test_unavailable_backend_returns_fallback_feedback() {
        let body = multipart_body(
            &acme_fields(),
            Some(("resume.pdf", "application/pdf", b"%PDF-1.4 resume")),
        );
        let response = app(ScriptedBackend::failing())
            .oneshot(analyzer_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": true,
                "feedback": {
                    "overallScore": 0,
                    "sections": {
                        "compatibility": fallback_section("compatibility"),
                        "toneAndStyle": fallback_section("toneAndStyle"),
                        "content": fallback_section("content"),
                        "structure": fallback_section("structure"),
                        "skills": fallback_section("skills")
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_model_feedback_passes_through() {
        let section = json!({
            "score": 64,
            "tips": [{ "kind": "positive", "statement": "Clear layout", "explanation": "Easy to scan" }]
        });
        let feedback = json!({
            "overallScore": 64,
            "sections": {
                "compatibility": section,
                "toneAndStyle": section,
                "content": section,
                "structure": section,
                "skills": section
            }
        });
        let backend = ScriptedBackend::text(format!("```json\n{feedback}\n```"));
        let body = multipart_body(
            &acme_fields(),
            Some(("resume.pdf", "application/pdf", b"%PDF-1.4 resume")),
        );

        let response = app(backend).oneshot(analyzer_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["feedback"], feedback);
    }

    #[tokio::test]
    async fn test_missing_fields_are_reported_together() {
        let body = multipart_body(&[("companyName", "Acme")], None);
        let response = app(ScriptedBackend::failing())
            .oneshot(analyzer_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "error": "Job title is required, Job description is required, Resume file is required"
            })
        );
    }

    #[tokio::test]
    async fn test_non_pdf_upload_rejected() {
        let body = multipart_body(
            &acme_fields(),
            Some(("resume.docx", "application/msword", b"PK")),
        );
        let response = app(ScriptedBackend::failing())
            .oneshot(analyzer_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Only PDF files are supported");
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_reported_as_oversize() {
        let oversized = vec![b'%'; 13 * 1024 * 1024];
        let body = multipart_body(
            &acme_fields(),
            Some(("resume.pdf", "application/pdf", &oversized)),
        );
        let backend = Arc::new(ScriptedBackend::text("{}"));
        let app = build_router(AppState {
            llm: backend.clone(),
            schema: Arc::new(SchemaContract::feedback()),
        });

        let response = app.oneshot(analyzer_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "File size must be less than 10MB" })
        );
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_non_multipart_body_is_internal_error() {
        let response = app(ScriptedBackend::failing())
            .oneshot(json_request(
                "/api/utilities/resume-analyzer",
                json!({ "companyName": "Acme" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "Internal Server Error" })
        );
    }

    #[tokio::test]
    async fn test_draft_email_returns_html() {
        let response = app(ScriptedBackend::text("<div>Welcome aboard</div>"))
            .oneshot(json_request(
                "/api/utilities/email-template-generator",
                json!({ "template": "account_creation", "company": "Acme" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "html": "<div>Welcome aboard</div>" })
        );
    }

    #[tokio::test]
    async fn test_draft_email_requires_key_points_or_template() {
        let response = app(ScriptedBackend::text("<p>unused</p>"))
            .oneshot(json_request(
                "/api/utilities/email-template-generator",
                json!({ "tone": "casual", "keyPoints": [] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "Please provide key points or select a template."
        );
    }

    #[tokio::test]
    async fn test_draft_email_unknown_template_is_client_error() {
        let response = app(ScriptedBackend::text("<p>unused</p>"))
            .oneshot(json_request(
                "/api/utilities/email-template-generator",
                json!({ "template": "birthday" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn test_draft_email_empty_output_is_error() {
        let response = app(ScriptedBackend::empty())
            .oneshot(json_request(
                "/api/utilities/email-template-generator",
                json!({ "keyPoints": ["Quarterly update"] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "No HTML generated.");
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = app(ScriptedBackend::empty())
            .oneshot(
                Request::builder()
                    .uri("/api/utilities/email-template-generator/templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let templates = body["templates"].as_array().unwrap();
        assert_eq!(templates.len(), 5);
        assert_eq!(templates[0]["key"], "invoice");
        assert_eq!(templates[0]["type"], "business");
        assert!(templates[0]["keyPoints"].as_array().unwrap().len() >= 3);
    }
}
