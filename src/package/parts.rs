//! Package parts, content-type manifest and relationship graph.
//!
//! The manifest is generated from the assembled part set and the root
//! relationships from the declared graph, so the two package invariants —
//! every part has a declared content type, every relationship target exists
//! — hold by construction and are re-checked in `verify`.

use crate::document::LogicalDocument;
use crate::error::PackageError;

use super::wml;

pub const DOCUMENT_PART: &str = "word/document.xml";
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const MAIN_PART_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";
const XML_CONTENT_TYPE: &str = "application/xml";

const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

#[derive(Debug, Clone)]
pub struct PackagePart {
    /// Forward-slash, case-sensitive path inside the archive.
    pub path: String,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

impl PackagePart {
    fn new(path: &str, content_type: &'static str, data: String) -> Self {
        Self { path: path.to_string(), content_type, data: data.into_bytes() }
    }
}

#[derive(Debug, Clone)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    /// Target path, package-root relative.
    pub target: String,
}

/// The full part set for one output, in the order it is written to the
/// archive. Order is not significant to readers but is kept fixed so the
/// container bytes are deterministic.
#[derive(Debug, Clone)]
pub struct PackageSet {
    pub parts: Vec<PackagePart>,
    pub relationships: Vec<Relationship>,
}

pub fn assemble(doc: &LogicalDocument) -> PackageSet {
    let document = PackagePart::new(DOCUMENT_PART, MAIN_PART_CONTENT_TYPE, wml::document_xml(doc));

    let relationships = vec![Relationship {
        id: "rId1".to_string(),
        rel_type: OFFICE_DOCUMENT_REL_TYPE,
        target: DOCUMENT_PART.to_string(),
    }];

    let root_rels = PackagePart::new(
        ROOT_RELS_PART,
        RELS_CONTENT_TYPE,
        relationships_xml(&relationships),
    );
    // Attachment point for header/footer sub-parts; empty today.
    let document_rels = PackagePart::new(DOCUMENT_RELS_PART, RELS_CONTENT_TYPE, relationships_xml(&[]));

    let content_types = PackagePart::new(
        CONTENT_TYPES_PART,
        XML_CONTENT_TYPE,
        content_types_xml(&[&document, &root_rels, &document_rels]),
    );

    PackageSet {
        parts: vec![content_types, document, root_rels, document_rels],
        relationships,
    }
}

impl PackageSet {
    /// Confirms every declared relationship targets a part that will be in
    /// the archive. A failure here is an engine bug.
    pub fn verify(&self) -> Result<(), PackageError> {
        for rel in &self.relationships {
            if !self.parts.iter().any(|part| part.path == rel.target) {
                return Err(PackageError::DanglingRelationship {
                    id: rel.id.clone(),
                    target: rel.target.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Builds `[Content_Types].xml` over the given parts: extension defaults
/// for `rels` and `xml`, an override for any part whose content type is not
/// covered by its extension default.
fn content_types_xml(parts: &[&PackagePart]) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(&format!("<Types xmlns=\"{CT_NS}\">"));
    xml.push_str(&format!(
        "<Default Extension=\"rels\" ContentType=\"{RELS_CONTENT_TYPE}\"/>"
    ));
    xml.push_str(&format!(
        "<Default Extension=\"xml\" ContentType=\"{XML_CONTENT_TYPE}\"/>"
    ));
    for part in parts {
        if default_for_extension(&part.path) != Some(part.content_type) {
            xml.push_str(&format!(
                "<Override PartName=\"/{}\" ContentType=\"{}\"/>",
                part.path, part.content_type
            ));
        }
    }
    xml.push_str("</Types>");
    xml
}

fn default_for_extension(path: &str) -> Option<&'static str> {
    match path.rsplit('.').next() {
        Some("rels") => Some(RELS_CONTENT_TYPE),
        Some("xml") => Some(XML_CONTENT_TYPE),
        _ => None,
    }
}

fn relationships_xml(relationships: &[Relationship]) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(&format!("<Relationships xmlns=\"{REL_NS}\">"));
    for rel in relationships {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
            rel.id, rel.rel_type, rel.target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Run};

    fn sample_doc() -> LogicalDocument {
        LogicalDocument {
            blocks: vec![Block::Paragraph { runs: vec![Run::plain("x")] }],
        }
    }

    #[test]
    fn test_part_set_and_order() {
        let set = assemble(&sample_doc());
        let paths: Vec<&str> = set.parts.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![CONTENT_TYPES_PART, DOCUMENT_PART, ROOT_RELS_PART, DOCUMENT_RELS_PART]
        );
    }

    #[test]
    fn test_manifest_overrides_main_part_only() {
        let set = assemble(&sample_doc());
        let manifest = String::from_utf8(set.parts[0].data.clone()).unwrap();
        assert!(manifest.contains("<Override PartName=\"/word/document.xml\""));
        assert_eq!(manifest.matches("<Override").count(), 1);
        assert!(manifest.contains("Extension=\"rels\""));
        assert!(manifest.contains("Extension=\"xml\""));
    }

    #[test]
    fn test_root_relationship_targets_document_part() {
        let set = assemble(&sample_doc());
        assert_eq!(set.relationships.len(), 1);
        assert_eq!(set.relationships[0].target, DOCUMENT_PART);
        let rels = String::from_utf8(set.parts[2].data.clone()).unwrap();
        assert!(rels.contains("Target=\"word/document.xml\""));
        assert!(rels.contains(OFFICE_DOCUMENT_REL_TYPE));
    }

    #[test]
    fn test_verify_accepts_consistent_set() {
        assert!(assemble(&sample_doc()).verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_dangling_relationship() {
        let mut set = assemble(&sample_doc());
        set.relationships.push(Relationship {
            id: "rId9".to_string(),
            rel_type: OFFICE_DOCUMENT_REL_TYPE,
            target: "word/missing.xml".to_string(),
        });
        match set.verify() {
            Err(PackageError::DanglingRelationship { id, target }) => {
                assert_eq!(id, "rId9");
                assert_eq!(target, "word/missing.xml");
            }
            other => panic!("expected dangling relationship error, got {other:?}"),
        }
    }
}
