//! reportforge
//!
//! A PPAP quality-report DOCX generation service:
//! - Tolerant field resolution over loosely-keyed input records
//! - RPN risk scoring with high-risk highlighting
//! - Styled paragraph/table composition into an immutable document tree
//! - Office Open XML (zip) package serialization
//! - axum HTTP boundary

pub mod document;
pub mod error;
pub mod package;
pub mod report;
pub mod server;

// Re-exports for convenience
pub use error::{PackageError, RenderError};
pub use report::payload::ReportPayload;

use tracing::info;

/// Renders one report payload into DOCX package bytes.
///
/// The single boundary contract of the engine: a pure, synchronous
/// computation with no shared state, safe to run from arbitrarily many
/// tasks in parallel. Fails only on an undecodable embedded sections
/// payload (`RenderError::Parse`) or an internal serialization fault
/// (`RenderError::Package`); data-shape irregularities degrade to defaults.
pub fn render(payload: &ReportPayload) -> Result<Vec<u8>, RenderError> {
    let normalized = payload.normalize()?;
    let doc = document::compose(&normalized);
    let bytes = package::serialize(&doc)?;
    info!(
        title = %normalized.title,
        sections = normalized.sections.len(),
        bytes = bytes.len(),
        "rendered report package"
    );
    Ok(bytes)
}
