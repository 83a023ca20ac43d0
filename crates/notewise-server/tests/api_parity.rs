//! API parity tests — validates that response shapes match what the web
//! client (script.js) reads: `summary`, `tags`, and `questions[]` with
//! `id`, `question`, `options`, `answer`.
//!
//! These tests drive the real router in-process (no TCP listener).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use notewise_core::NotewiseConfig;
use notewise_server::{build_router, AppState};
use tower::ServiceExt;

const BOUNDARY: &str = "notewise-test-boundary";

const NOTES: &str = "Mitochondria produce energy for the cell. \
    The nucleus stores genetic information. \
    Ribosomes build proteins from amino acids. \
    Mitochondria have their own DNA. \
    Proteins fold into complex shapes. \
    The cell membrane controls what enters the cell.";

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: {}\r\n\r\n",
                        name, filename, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn app() -> axum::Router {
    build_router(Arc::new(AppState::new(NotewiseConfig::default())))
}

async fn post_process(parts: &[Part<'_>]) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_shape() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["time"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_process_text_shape() {
    let (status, json) = post_process(&[Part::Text("text", NOTES), Part::Text("seed", "7")]).await;
    assert_eq!(status, StatusCode::OK);

    assert!(json["summary"].is_string());
    assert!(!json["summary"].as_str().unwrap().is_empty());

    let tags = json["tags"].as_array().unwrap();
    assert!(!tags.is_empty() && tags.len() <= 6);
    assert_eq!(tags[0], "cell");
    assert_eq!(tags[1], "mitochondria");

    let questions = json["questions"].as_array().unwrap();
    assert!(!questions.is_empty() && questions.len() <= 6);
    for (i, q) in questions.iter().enumerate() {
        assert_eq!(q["id"], format!("q{}", i + 1));
        assert!(q["question"].is_string());
        let options = q["options"].as_array().unwrap();
        assert!(options.len() <= 4);
        assert!(options.contains(&q["answer"]));
    }
    assert_eq!(
        questions[0]["question"],
        "Mitochondria produce energy for the _____."
    );
}

#[tokio::test]
async fn test_same_seed_same_response() {
    let parts = [Part::Text("text", NOTES), Part::Text("seed", "123")];
    let (_, first) = post_process(&parts).await;
    let (_, second) = post_process(&parts).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_text_file_upload() {
    let (status, json) = post_process(&[Part::File(
        "files",
        "biology.txt",
        "text/plain",
        NOTES.as_bytes(),
    )])
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tags"][0], "cell");
}

#[tokio::test]
async fn test_latin1_upload_is_decoded() {
    let (status, json) = post_process(&[Part::File(
        "file",
        "notes.txt",
        "text/plain",
        b"Caf\xe9 culture spread quickly. Caf\xe9 owners thrived.",
    )])
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["summary"].as_str().unwrap().contains("Café"));
}

#[tokio::test]
async fn test_unsupported_upload_rejected() {
    let (status, json) = post_process(&[
        Part::Text("text", NOTES),
        Part::File("files", "slides.pptx", "application/octet-stream", b"PK\x03\x04"),
    ])
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Unsupported file type for 'slides.pptx'. Use PDF or TXT."
    );
}

#[tokio::test]
async fn test_empty_request_is_no_content() {
    let (status, json) = post_process(&[Part::Text("text", "   ")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "No text found in request. Provide 'text' or upload PDF/TXT files[]"
    );
}

#[tokio::test]
async fn test_bad_seed_rejected() {
    let (status, json) = post_process(&[Part::Text("text", NOTES), Part::Text("seed", "abc")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("seed"));
}

#[tokio::test]
async fn test_broken_pdf_rejected() {
    let (status, json) = post_process(&[Part::File(
        "files",
        "broken.pdf",
        "application/pdf",
        b"not really a pdf",
    )])
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to read PDF 'broken.pdf'"));
}

#[tokio::test]
async fn test_file_parts_ignored_when_files_present() {
    let (status, json) = post_process(&[
        Part::File("files", "biology.txt", "text/plain", NOTES.as_bytes()),
        Part::File("file", "slides.pptx", "application/octet-stream", b"PK\x03\x04"),
    ])
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tags"][0], "cell");
}

#[tokio::test]
async fn test_file_parts_used_without_files() {
    let (status, json) = post_process(&[
        Part::File("file", "slides.pptx", "application/octet-stream", b"PK\x03\x04"),
    ])
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Unsupported file type for 'slides.pptx'. Use PDF or TXT."
    );
}

#[tokio::test]
async fn test_non_multipart_body_is_no_content() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text": "Cells divide."}"#))
        .unwrap();
    let (status, json) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "No text found in request. Provide 'text' or upload PDF/TXT files[]"
    );
}
