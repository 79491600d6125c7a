use axum::{
    extract::Json,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::RenderError;
use crate::package::DOCX_CONTENT_TYPE;
use crate::report::payload::ReportPayload;

// --- Error -> response mapping ---
// Parse failures are the caller's data (400, with the offending fragment
// for diagnostics); package failures are engine bugs (500).
pub struct ServerError(RenderError);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            RenderError::Parse { fragment, .. } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.0.to_string(), "fragment": fragment }),
            ),
            RenderError::Package(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": self.0.to_string() }),
            ),
        };
        warn!(status = %status, error = %self.0, "render request failed");
        (status, Json(body)).into_response()
    }
}

impl From<RenderError> for ServerError {
    fn from(err: RenderError) -> Self {
        Self(err)
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate-docx", post(generate_docx))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index() -> impl IntoResponse {
    Html(
        r#"<html>
    <head><title>reportforge</title></head>
    <body>
        <h1>reportforge</h1>
        <p>POST /generate-docx with a report payload to receive a DOCX file.</p>
        <p><a href="/health">Health</a></p>
    </body>
</html>"#,
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "reportforge",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn generate_docx(Json(payload): Json<ReportPayload>) -> Result<Response, ServerError> {
    let bytes = crate::render(&payload)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_CONTENT_TYPE));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&content_disposition(&payload.filename))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"report.docx\"")),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("Content-Disposition"),
    );

    Ok((headers, bytes).into_response())
}

/// Builds the attachment disposition. Non-ASCII filenames get an
/// RFC 5987 `filename*` parameter with percent-encoding alongside an ASCII
/// fallback, so the header stays valid for every client.
fn content_disposition(filename: &str) -> String {
    let filename = if filename.trim().is_empty() { "report.docx" } else { filename.trim() };
    if filename.is_ascii() {
        format!("attachment; filename=\"{}\"", filename.replace(['"', '\\'], "_"))
    } else {
        let fallback: String = filename.chars().filter(char::is_ascii).collect();
        let fallback = if fallback.trim().is_empty() { "report.docx" } else { fallback.trim() };
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback.replace(['"', '\\'], "_"),
            urlencoding::encode(filename)
        )
    }
}
