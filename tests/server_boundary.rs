//! HTTP boundary checks: the router is driven directly with oneshot
//! requests, no socket required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn post_json(uri: &str, body: serde_json::Value) -> axum::response::Response {
    reportforge::server::app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = reportforge::server::app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "reportforge");
}

#[tokio::test]
async fn test_generate_docx_returns_attachment() {
    let response = post_json(
        "/generate-docx",
        json!({
            "title": "PPAP REPORT",
            "customer": "Acme",
            "filename": "acme-ppap.docx",
            "sections": {
                "RiskAnalysis": [{"step": "Weld", "severity": "9", "occurrence": "4", "detection": "2"}]
            }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert_eq!(disposition, "attachment; filename=\"acme-ppap.docx\"");
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_EXPOSE_HEADERS],
        "Content-Disposition"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..4], b"PK\x03\x04");
}

#[tokio::test]
async fn test_malformed_embedded_sections_is_bad_request() {
    let response = post_json(
        "/generate-docx",
        json!({ "sections": "```json\n{not json}\n```" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("embedded sections"));
    assert!(error["fragment"].as_str().unwrap().contains("not json"));
}

#[tokio::test]
async fn test_empty_payload_still_renders() {
    // Data-shape tolerance: an empty body of defaults renders a complete
    // document with placeholders rather than failing.
    let response = post_json("/generate-docx", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_non_ascii_filename_is_percent_encoded() {
    let response = post_json(
        "/generate-docx",
        json!({ "filename": "prüfbericht.docx", "sections": {} }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("filename*=UTF-8''pr%C3%BCfbericht.docx"));
}
