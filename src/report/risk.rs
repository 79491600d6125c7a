//! Risk Evaluator
//!
//! Computes the risk priority number (RPN = severity × occurrence ×
//! detection) for an FMEA row. An explicit non-zero RPN field supplied by
//! the producer wins verbatim over the recomputed product. Absent or
//! non-numeric factors coerce to 0, which silently zeroes the product; that
//! defaulting is load-bearing for existing consumers and must not change.

use super::payload::Record;
use super::resolve::{parse_numeric, resolve, resolve_number};

/// Rows scoring above this RPN get the high-risk visual tint.
pub const HIGH_RISK_THRESHOLD: i64 = 100;

pub const SEVERITY_ALIASES: &[&str] = &["severity", "sev", "s"];
pub const OCCURRENCE_ALIASES: &[&str] = &["occurrence", "occur", "occ", "o"];
pub const DETECTION_ALIASES: &[&str] = &["detection", "detect", "det", "d"];
pub const RPN_ALIASES: &[&str] = &["rpn", "risk_priority_number", "risk_score"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskScore {
    pub severity: i64,
    pub occurrence: i64,
    pub detection: i64,
    pub rpn: i64,
    /// What the RPN cell should display: the explicit field verbatim when
    /// it was used, otherwise the recomputed product.
    pub rpn_text: String,
    pub high_risk: bool,
}

impl RiskScore {
    pub fn evaluate(row: &Record) -> Self {
        let severity = resolve_number(row, SEVERITY_ALIASES);
        let occurrence = resolve_number(row, OCCURRENCE_ALIASES);
        let detection = resolve_number(row, DETECTION_ALIASES);

        let explicit = resolve(row, RPN_ALIASES, "");
        let explicit_value = parse_numeric(&explicit);
        let (rpn, rpn_text) = if !explicit.is_empty() && explicit_value != 0 {
            (explicit_value, explicit)
        } else {
            let product = severity * occurrence * detection;
            (product, product.to_string())
        };

        Self {
            severity,
            occurrence,
            detection,
            rpn,
            rpn_text,
            high_risk: rpn > HIGH_RISK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Record {
        value.as_object().expect("test row must be an object").clone()
    }

    #[test]
    fn test_rpn_is_product_of_factors() {
        let score = RiskScore::evaluate(&row(json!({
            "severity": "9", "occurrence": "4", "detection": "2"
        })));
        assert_eq!(score.rpn, 72);
        assert_eq!(score.rpn_text, "72");
        assert!(!score.high_risk);
    }

    #[test]
    fn test_explicit_rpn_wins_verbatim() {
        let score = RiskScore::evaluate(&row(json!({
            "severity": "2", "occurrence": "2", "detection": "2", "rpn": "150"
        })));
        assert_eq!(score.rpn, 150);
        assert_eq!(score.rpn_text, "150");
        assert!(score.high_risk);
    }

    #[test]
    fn test_explicit_zero_rpn_falls_back_to_product() {
        let score = RiskScore::evaluate(&row(json!({
            "severity": "3", "occurrence": "4", "detection": "5", "rpn": "0"
        })));
        assert_eq!(score.rpn, 60);
        assert_eq!(score.rpn_text, "60");
    }

    #[test]
    fn test_missing_factor_zeroes_product() {
        let score = RiskScore::evaluate(&row(json!({
            "severity": "10", "occurrence": "10"
        })));
        assert_eq!(score.detection, 0);
        assert_eq!(score.rpn, 0);
        assert!(!score.high_risk);
    }

    #[test]
    fn test_non_numeric_factor_coerces_to_zero() {
        let score = RiskScore::evaluate(&row(json!({
            "severity": "high", "occurrence": "4", "detection": "2"
        })));
        assert_eq!(score.severity, 0);
        assert_eq!(score.rpn, 0);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = RiskScore::evaluate(&row(json!({"rpn": "100"})));
        assert!(!at.high_risk);
        let above = RiskScore::evaluate(&row(json!({
            "severity": "8", "occurrence": "5", "detection": "3"
        })));
        assert_eq!(above.rpn, 120);
        assert!(above.high_risk);
    }

    #[test]
    fn test_alias_variants_resolve() {
        let score = RiskScore::evaluate(&row(json!({
            "Sev": 7, "OCC": 3, "Detect": 2
        })));
        assert_eq!(score.rpn, 42);
    }
}
