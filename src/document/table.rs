//! Table Renderer
//!
//! Turns an ordered record list plus a static column spec into one table
//! block. An empty section renders a placeholder paragraph instead of a
//! header-only table shell — a table with no data rows is confusing output
//! and is explicitly avoided.

use crate::report::payload::Record;
use crate::report::resolve::resolve;
use crate::report::risk::RiskScore;

use super::block::{Block, Cell, Run};
use super::columns::{ColumnRole, TableSpec};

pub const NO_DATA_PLACEHOLDER: &str = "No data available for this section.";

/// Hex RGB fill applied to the RPN cell of rows scoring above the
/// high-risk threshold.
pub const HIGH_RISK_SHADE: &str = "FFC7CE";

pub fn render_table(spec: &TableSpec, records: &[Record]) -> Block {
    if records.is_empty() {
        return Block::Paragraph {
            runs: vec![Run::plain(NO_DATA_PLACEHOLDER)],
        };
    }

    Block::Table {
        header: spec.columns.iter().map(|c| c.header.to_string()).collect(),
        header_shade: spec.header_shade.to_string(),
        rows: records.iter().map(|record| render_row(spec, record)).collect(),
    }
}

fn render_row(spec: &TableSpec, record: &Record) -> Vec<Cell> {
    let score = spec.risk_scored.then(|| RiskScore::evaluate(record));

    spec.columns
        .iter()
        .map(|column| match (&score, column.role) {
            (Some(s), ColumnRole::Severity) => Cell::plain(s.severity.to_string()),
            (Some(s), ColumnRole::Occurrence) => Cell::plain(s.occurrence.to_string()),
            (Some(s), ColumnRole::Detection) => Cell::plain(s.detection.to_string()),
            (Some(s), ColumnRole::Rpn) if s.high_risk => {
                Cell::shaded(s.rpn_text.clone(), HIGH_RISK_SHADE)
            }
            (Some(s), ColumnRole::Rpn) => Cell::plain(s.rpn_text.clone()),
            _ => Cell::plain(resolve(record, column.aliases, column.default)),
        })
        .collect()
}
