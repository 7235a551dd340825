//! End-to-end tests for the print submission API
//!
//! Drives the real router (no network) with a tempdir-backed hot folder.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hotfolder_server::ServerState;
use hotfolder_server::core::{Config, PrintConfig, build_app};

// "hello world"
const DOCUMENT_BASE64: &str = "aGVsbG8gd29ybGQ=";

fn make_app(hot_folder: &std::path::Path) -> Router {
    let config = Config {
        http_port: 0,
        print: PrintConfig {
            hot_folder: hot_folder.to_path_buf(),
            printers: vec!["Printer 1".to_string(), "Printer 2".to_string()],
        },
        log_level: "info".to_string(),
        log_dir: None,
    };
    build_app().with_state(ServerState::initialize(&config))
}

fn post_print(body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/print")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_body() -> Body {
    Body::from(
        json!({
            "Document": DOCUMENT_BASE64,
            "FileName": "Sample.pdf",
            "PrinterName": "Bullzip PDF Printer",
            "Username": "hskartono",
        })
        .to_string(),
    )
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_printers_returns_configured_order() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/printers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, json!(["Printer 1", "Printer 2"]));
}

#[tokio::test]
async fn submit_deposits_decoded_document() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(post_print(valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    // Success sentinel kept for existing consumers
    assert_eq!(read_json(response).await, json!(200));

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);

    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.contains("_Sample_hskartono_Bullzip_PDF_Printer"));
    assert!(name.ends_with(".pdf"));

    assert_eq!(std::fs::read(entries[0].path()).unwrap(), b"hello world");
}

#[tokio::test]
async fn submit_without_body_reports_print_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(post_print(Body::empty()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(
        body,
        json!({ "printRequest": ["Request print harus diisi json."] })
    );
}

#[tokio::test]
async fn submit_null_body_reports_print_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(post_print(Body::from("null")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["printRequest"][0], "Request print harus diisi json.");
}

#[tokio::test]
async fn submit_without_content_type_reports_print_request() {
    let dir = tempfile::tempdir().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/print")
        .body(valid_body())
        .unwrap();
    let response = make_app(dir.path()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert!(body.get("printRequest").is_some());
}

#[tokio::test]
async fn submit_empty_object_reports_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(post_print(Body::from("{}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    let map = body.as_object().unwrap();
    let mut fields: Vec<_> = map.keys().map(String::as_str).collect();
    fields.sort_unstable();
    assert_eq!(
        fields,
        ["Document", "FileName", "PrinterName", "Username"]
    );
    assert_eq!(body["FileName"][0], "FileName harus diisi.");

    // No file may appear on a rejected submission
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn submit_invalid_base64_reports_convert_error() {
    let dir = tempfile::tempdir().unwrap();
    let body = Body::from(
        json!({
            "Document": "not base64!",
            "FileName": "Sample.pdf",
            "PrinterName": "Bullzip PDF Printer",
            "Username": "hskartono",
        })
        .to_string(),
    );
    let response = make_app(dir.path()).oneshot(post_print(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    let map = body.as_object().unwrap();
    assert_eq!(map.len(), 1);
    let message = body["ConvertBase64"][0].as_str().unwrap();
    assert!(message.starts_with("Gagal melakukan konversi Document dari Base64."));
}

#[tokio::test]
async fn submit_into_missing_hot_folder_reports_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let response = make_app(&missing)
        .oneshot(post_print(valid_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    let message = body["WriteAllBytesAsync"][0].as_str().unwrap();
    assert!(message.starts_with("Gagal menulis file"));

    assert!(!missing.exists());
}

#[tokio::test]
async fn deposited_file_round_trips_to_original_document() {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    let dir = tempfile::tempdir().unwrap();
    let response = make_app(dir.path())
        .oneshot(post_print(valid_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
    let content = std::fs::read(entry.path()).unwrap();
    assert_eq!(STANDARD.encode(&content), DOCUMENT_BASE64);
}
