//! Report payload types and sections normalization.
//!
//! The transport layer hands the core a `ReportPayload` already
//! deserialized from JSON. The `sections` field is the variable part: it
//! arrives either as a plain JSON object or as an embedded JSON string,
//! frequently wrapped in Markdown code fences by the producing pipeline.
//! Normalization strips the fences, decodes the string, maps loosely-named
//! section keys onto the known set and coerces each section into an ordered
//! record list. Only an undecodable embedded string is an error; every
//! other irregularity is tolerated.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RenderError;

use super::resolve::normalize_key;

/// One loosely-keyed row from the caller. No casing or vocabulary is
/// guaranteed; access goes through the field resolver.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportPayload {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default = "default_filename")]
    pub filename: String,
    /// Object form, or an embedded (possibly code-fenced) JSON string.
    #[serde(default)]
    pub sections: Value,
}

fn default_title() -> String {
    "PPAP REPORT".to_string()
}

fn default_filename() -> String {
    "report.docx".to_string()
}

/// The fixed set of known report sections. Unknown keys in the payload are
/// ignored, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    Meta,
    RiskAnalysis,
    ControlPlan,
    Procedure,
    Checklist,
}

impl SectionKind {
    /// The table sections in their fixed document order.
    pub const TABLES: [SectionKind; 4] = [
        SectionKind::RiskAnalysis,
        SectionKind::ControlPlan,
        SectionKind::Procedure,
        SectionKind::Checklist,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match normalize_key(key).as_str() {
            "meta" | "metadata" => Some(SectionKind::Meta),
            "riskanalysis" | "fmea" | "risk" => Some(SectionKind::RiskAnalysis),
            "controlplan" | "control" => Some(SectionKind::ControlPlan),
            "procedure" | "procedures" => Some(SectionKind::Procedure),
            "checklist" | "checklists" => Some(SectionKind::Checklist),
            _ => None,
        }
    }
}

/// Payload after sections normalization: fixed section kinds, ordered
/// record lists, immutable from here on.
#[derive(Debug, Clone)]
pub struct NormalizedPayload {
    pub title: String,
    pub customer: String,
    pub sections: BTreeMap<SectionKind, Vec<Record>>,
}

impl ReportPayload {
    pub fn normalize(&self) -> Result<NormalizedPayload, RenderError> {
        let sections_value = match &self.sections {
            Value::String(raw) => decode_embedded(raw)?,
            other => other.clone(),
        };

        let mut sections: BTreeMap<SectionKind, Vec<Record>> = BTreeMap::new();
        if let Value::Object(map) = sections_value {
            for (key, value) in map {
                let Some(kind) = SectionKind::from_key(&key) else {
                    debug!(section = %key, "ignoring unknown section");
                    continue;
                };
                sections.entry(kind).or_default().extend(coerce_records(value));
            }
        }

        Ok(NormalizedPayload {
            title: self.title.clone(),
            customer: self.customer.clone(),
            sections,
        })
    }
}

fn decode_embedded(raw: &str) -> Result<Value, RenderError> {
    let stripped = strip_code_fences(raw);
    if stripped.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(stripped).map_err(|source| RenderError::Parse {
        fragment: fragment_of(stripped),
        source,
    })
}

/// Strips a surrounding Markdown code fence, including its info string
/// (```json, ```JSON, ...), leaving the embedded document.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };
    rest.trim_end().trim_end_matches("```").trim()
}

/// At most this much of a bad embedded payload is echoed back in the error.
const FRAGMENT_LIMIT: usize = 160;

fn fragment_of(text: &str) -> String {
    if text.len() <= FRAGMENT_LIMIT {
        return text.to_string();
    }
    let mut end = FRAGMENT_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// A section body should be an array of objects; a lone object is accepted
/// as a single-record section, anything else as empty.
fn coerce_records(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
        Value::Object(record) => vec![record],
        _ => Vec::new(),
    }
}
