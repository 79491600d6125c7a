//! Error taxonomy for the render pipeline.
//!
//! Two kinds only: `Parse` (the caller's embedded sections payload could not
//! be decoded) and `Package` (an internal serialization fault). Data-shape
//! irregularities — missing fields, odd casing, non-numeric risk factors,
//! empty sections — are never errors; the resolver and risk evaluator absorb
//! them by defaulting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload's sections arrived as an embedded JSON string that does
    /// not decode. Carries the offending fragment for diagnostics.
    #[error("failed to decode embedded sections payload: {source}")]
    Parse {
        fragment: String,
        #[source]
        source: serde_json::Error,
    },

    /// Internal serialization fault. Indicates an engine bug, not bad
    /// caller data.
    #[error(transparent)]
    Package(#[from] PackageError),
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("zip container write failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("package part write failed: {0}")]
    Io(#[from] std::io::Error),

    /// A declared relationship points at a part that is not in the archive.
    /// Producing such a container would make it unreadable by standard
    /// consumers, so serialization refuses up front.
    #[error("relationship {id} targets missing part {target}")]
    DanglingRelationship { id: String, target: String },
}
