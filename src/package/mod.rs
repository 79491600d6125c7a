//! Package Serializer Module
//!
//! Turns a `LogicalDocument` into the bytes of an Office Open XML package:
//! WordprocessingML markup for the document part, a content-type manifest
//! generated from the part set, relationship parts, and a deterministic zip
//! container. The part/relationship set is verified for self-consistency
//! before anything is written; an inconsistency is an engine bug surfaced
//! as a `PackageError`, never silently shipped.

pub mod container;
pub mod parts;
pub mod wml;

use crate::document::LogicalDocument;
use crate::error::PackageError;

pub use parts::{PackagePart, PackageSet, DOCX_CONTENT_TYPE};

pub fn serialize(doc: &LogicalDocument) -> Result<Vec<u8>, PackageError> {
    let set = parts::assemble(doc);
    set.verify()?;
    container::write(&set.parts)
}
