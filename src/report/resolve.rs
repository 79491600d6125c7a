//! Field Resolver
//!
//! Upstream producers do not agree on field naming or casing: the same
//! logical column arrives as `Process_step`, `process step` or `step`, and
//! often not at all. Every lookup goes through one tolerant primitive that
//! walks an ordered alias list and degrades to a declared default instead of
//! failing the render.

use serde_json::Value;

use super::payload::Record;

/// Returns the first alias whose key is present in `record` with a
/// non-empty stringified value, falling back to `default`.
///
/// Presence is asymmetric on purpose: `0`, `false` and `"0"` all count as
/// present (they stringify non-empty); only absent keys and empty strings
/// fall through. Never errors.
pub fn resolve(record: &Record, aliases: &[&str], default: &str) -> String {
    for alias in aliases {
        if let Some(value) = lookup(record, alias) {
            let text = stringify(value);
            if !text.is_empty() {
                return text;
            }
        }
    }
    default.to_string()
}

/// Numeric companion to [`resolve`]: missing or non-numeric values coerce
/// to 0 rather than erroring.
pub fn resolve_number(record: &Record, aliases: &[&str]) -> i64 {
    parse_numeric(&resolve(record, aliases, ""))
}

pub fn parse_numeric(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| trimmed.parse::<f64>().map(|v| v as i64))
        .unwrap_or(0)
}

fn lookup<'a>(record: &'a Record, alias: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(alias) {
        return Some(value);
    }
    record
        .iter()
        .find(|(key, _)| keys_match(key, alias))
        .map(|(_, value)| value)
}

/// Key comparison ignores ASCII case and the separator characters upstream
/// producers swap freely (spaces, underscores, dashes).
fn keys_match(key: &str, alias: &str) -> bool {
    normalize_key(key) == normalize_key(alias)
}

pub(crate) fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Nested structures are not scalar report fields; treat as absent.
        _ => String::new(),
    }
}
