//! Static column specifications per table section.
//!
//! Each spec fixes the displayed column set and order regardless of which
//! aliases actually match in the incoming records. Alias lists are ordered
//! by priority; the leading spellings are what the main upstream producer
//! emits today.

use crate::report::payload::SectionKind;
use crate::report::risk;

/// How the table renderer treats a column beyond plain resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Text,
    Severity,
    Occurrence,
    Detection,
    Rpn,
}

#[derive(Debug)]
pub struct Column {
    pub header: &'static str,
    pub aliases: &'static [&'static str],
    pub default: &'static str,
    pub role: ColumnRole,
}

impl Column {
    const fn text(
        header: &'static str,
        aliases: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self { header, aliases, default, role: ColumnRole::Text }
    }
}

#[derive(Debug)]
pub struct TableSpec {
    pub heading: &'static str,
    /// Hex RGB fill for the header row.
    pub header_shade: &'static str,
    /// Risk-scored tables get computed severity/occurrence/detection/RPN
    /// cells and the high-risk tint.
    pub risk_scored: bool,
    pub columns: &'static [Column],
}

pub static RISK_ANALYSIS: TableSpec = TableSpec {
    heading: "Failure Mode & Effects Analysis (FMEA)",
    header_shade: "D9E2F3",
    risk_scored: true,
    columns: &[
        Column::text("Process Step", &["process_step", "step", "process", "operation"], "-"),
        Column::text(
            "Potential Failure Mode",
            &["failure_mode", "potential_failure_mode", "failure"],
            "-",
        ),
        Column::text(
            "Potential Effect",
            &["effect", "potential_effect", "failure_effect"],
            "-",
        ),
        Column {
            header: "Sev",
            aliases: risk::SEVERITY_ALIASES,
            default: "0",
            role: ColumnRole::Severity,
        },
        Column {
            header: "Occ",
            aliases: risk::OCCURRENCE_ALIASES,
            default: "0",
            role: ColumnRole::Occurrence,
        },
        Column {
            header: "Det",
            aliases: risk::DETECTION_ALIASES,
            default: "0",
            role: ColumnRole::Detection,
        },
        Column {
            header: "RPN",
            aliases: risk::RPN_ALIASES,
            default: "0",
            role: ColumnRole::Rpn,
        },
        Column::text(
            "Recommended Action",
            &["recommended_action", "action", "recommendation"],
            "-",
        ),
    ],
};

pub static CONTROL_PLAN: TableSpec = TableSpec {
    heading: "Control Plan",
    header_shade: "E2EFDA",
    risk_scored: false,
    columns: &[
        Column::text("Process Step", &["process_step", "step", "process", "operation"], "-"),
        Column::text("Characteristic", &["characteristic", "feature", "parameter"], "-"),
        Column::text(
            "Specification / Tolerance",
            &["specification", "spec", "tolerance"],
            "-",
        ),
        Column::text(
            "Evaluation Method",
            &["evaluation_method", "measurement_method", "method", "gauge"],
            "-",
        ),
        Column::text("Sample Size", &["sample_size", "sample", "qty"], "-"),
        Column::text("Frequency", &["frequency", "freq", "interval"], "-"),
        Column::text("Control Method", &["control_method", "control"], "-"),
        Column::text("Reaction Plan", &["reaction_plan", "reaction", "corrective_action"], "-"),
    ],
};

pub static PROCEDURE: TableSpec = TableSpec {
    heading: "Procedure",
    header_shade: "FFF2CC",
    risk_scored: false,
    columns: &[
        Column::text("Step", &["step", "no", "number", "seq"], "-"),
        Column::text("Activity", &["activity", "description", "task", "instruction"], "-"),
        Column::text("Responsible", &["responsible", "owner", "who"], "-"),
        Column::text(
            "Reference Document",
            &["reference", "document", "record", "reference_document"],
            "-",
        ),
    ],
};

pub static CHECKLIST: TableSpec = TableSpec {
    heading: "Checklist",
    header_shade: "FCE4D6",
    risk_scored: false,
    columns: &[
        Column::text("Item", &["item", "requirement", "check", "description"], "-"),
        Column::text("Status", &["status", "result", "ok"], "-"),
        Column::text("Remarks", &["remarks", "comment", "comments", "note"], "-"),
    ],
};

/// The meta section renders as summary paragraphs, not a table, so it has
/// no spec here.
pub fn spec_for(kind: SectionKind) -> Option<&'static TableSpec> {
    match kind {
        SectionKind::RiskAnalysis => Some(&RISK_ANALYSIS),
        SectionKind::ControlPlan => Some(&CONTROL_PLAN),
        SectionKind::Procedure => Some(&PROCEDURE),
        SectionKind::Checklist => Some(&CHECKLIST),
        SectionKind::Meta => None,
    }
}
