// src/analysis/tests/handler_tests.rs
//! Router-level tests for the analyze endpoint: multipart ingestion, the
//! rejection envelopes, and temp-file cleanup on every rejection path.

use axum::body::{to_bytes, Body};
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::analysis::analysis_routes;
use crate::common::AppState;
use crate::services::{GeminiConfig, GeminiService};

const BOUNDARY: &str = "ats-api-test-boundary";

async fn test_app(name: &str) -> (Router, PathBuf) {
    let uploads_dir = std::env::temp_dir().join(format!("ats_api_handler_{}", name));
    tokio::fs::create_dir_all(&uploads_dir).await.unwrap();

    let state = AppState {
        uploads_dir: uploads_dir.clone(),
        gemini_service: Arc::new(GeminiService::new(GeminiConfig {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            timeout: Duration::from_secs(1),
        })),
    };

    let app = Router::new()
        .merge(analysis_routes())
        .layer(Extension(Arc::new(RwLock::new(state))));

    (app, uploads_dir)
}

/// Build a multipart body with a resume part and optional trailing fields
fn resume_form(filename: Option<&str>, content: &[u8]) -> Vec<u8> {
    let disposition = match filename {
        Some(name) => format!(
            "Content-Disposition: form-data; name=\"resume\"; filename=\"{}\"\r\n",
            name
        ),
        None => "Content-Disposition: form-data; name=\"resume\"\r\n".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\n{}Content-Type: application/octet-stream\r\n\r\n",
            BOUNDARY, disposition
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Multipart body carrying only a jobDescription field
fn form_without_resume() -> Vec<u8> {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"jobDescription\"\r\n\r\n\
         Senior Backend Engineer\r\n--{b}--\r\n",
        b = BOUNDARY
    )
    .into_bytes()
}

fn analyze_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn dir_entry_count(dir: &Path) -> usize {
    let mut entries = tokio::fs::read_dir(dir).await.unwrap();
    let mut count = 0;
    while entries.next_entry().await.unwrap().is_some() {
        count += 1;
    }
    count
}

#[tokio::test]
async fn test_txt_upload_rejected_and_no_temp_file_remains() {
    let (app, uploads_dir) = test_app("txt_upload").await;

    let request = analyze_request(resume_form(Some("resume.txt"), b"plain text resume"));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Only PDF files are allowed.");
    assert!(json.get("analysis").is_none());

    assert_eq!(dir_entry_count(&uploads_dir).await, 0);
    tokio::fs::remove_dir_all(&uploads_dir).await.unwrap();
}

#[tokio::test]
async fn test_missing_resume_field_rejected() {
    let (app, uploads_dir) = test_app("missing_field").await;

    let request = analyze_request(form_without_resume());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "No resume file uploaded.");

    assert_eq!(dir_entry_count(&uploads_dir).await, 0);
    tokio::fs::remove_dir_all(&uploads_dir).await.unwrap();
}

#[tokio::test]
async fn test_resume_part_without_filename_rejected() {
    let (app, uploads_dir) = test_app("unnamed_part").await;

    let request = analyze_request(resume_form(None, b"%PDF-1.4 who knows"));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Only PDF files are allowed.");

    assert_eq!(dir_entry_count(&uploads_dir).await, 0);
    tokio::fs::remove_dir_all(&uploads_dir).await.unwrap();
}

#[tokio::test]
async fn test_corrupt_pdf_rejected_and_no_temp_file_remains() {
    let (app, uploads_dir) = test_app("corrupt_pdf").await;

    // .pdf extension passes validation; the bytes fail structural extraction
    let request = analyze_request(resume_form(Some("resume.pdf"), b"not actually a pdf"));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Could not extract text from PDF. Please ensure it's a valid text-based PDF."
    );

    assert_eq!(dir_entry_count(&uploads_dir).await, 0);
    tokio::fs::remove_dir_all(&uploads_dir).await.unwrap();
}
