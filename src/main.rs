//! reportforge
//!
//! HTTP service that renders PPAP quality-report payloads into DOCX
//! packages. The render engine is pure and synchronous; this binary wires
//! up configuration, logging and the axum boundary.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

// ──────────────────────────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────────────────────────

/// Service configuration, read from the environment.
struct ServiceConfig {
    host: String,
    port: u16,
}

impl ServiceConfig {
    fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = ServiceConfig::from_env();
    let app = reportforge::server::app();

    // The configured port may already be taken by a stale instance; fall
    // back to the next one rather than refusing to start.
    let listener = match tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            let fallback = config.port + 1;
            warn!(port = config.port, %err, "port unavailable, trying {fallback}");
            tokio::net::TcpListener::bind((config.host.as_str(), fallback)).await?
        }
    };

    let addr = listener.local_addr()?;
    println!("🚀 reportforge ready: http://{addr}");
    info!(%addr, "serving");
    axum::serve(listener, app).await?;

    Ok(())
}
