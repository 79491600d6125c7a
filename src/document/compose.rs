//! Document Composer
//!
//! Assembles the full logical document in a fixed section order: title
//! heading, meta summary paragraphs, then the four table sections. Absent
//! sections still get their heading plus the renderer's placeholder, so the
//! document shape is stable across varying inputs. Pure input-to-tree
//! transformation; no state survives the call.

use tracing::debug;

use crate::report::payload::{NormalizedPayload, Record, SectionKind};
use crate::report::resolve::resolve;

use super::block::{Block, LogicalDocument, Run};
use super::columns::spec_for;
use super::table::render_table;

const PART_NAME_ALIASES: &[&str] = &["part_name", "component", "component_name", "name"];
const PART_NUMBER_ALIASES: &[&str] = &["part_number", "part_no", "component_id", "number"];
const REVISION_ALIASES: &[&str] = &["revision", "rev", "version"];

pub fn compose(payload: &NormalizedPayload) -> LogicalDocument {
    let mut blocks = Vec::new();

    blocks.push(Block::Heading {
        level: 1,
        text: payload.title.clone(),
    });
    blocks.extend(meta_summary(payload));

    for kind in SectionKind::TABLES {
        let Some(spec) = spec_for(kind) else { continue };
        let records = payload
            .sections
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default();
        debug!(section = spec.heading, rows = records.len(), "composing section");

        blocks.push(Block::Heading {
            level: 2,
            text: spec.heading.to_string(),
        });
        blocks.push(render_table(spec, records));
    }

    blocks.push(generated_stamp());

    LogicalDocument { blocks }
}

fn meta_summary(payload: &NormalizedPayload) -> Vec<Block> {
    let empty = Record::new();
    let meta = payload
        .sections
        .get(&SectionKind::Meta)
        .and_then(|records| records.first())
        .unwrap_or(&empty);

    let customer = if payload.customer.trim().is_empty() {
        "N/A".to_string()
    } else {
        payload.customer.clone()
    };

    vec![
        labeled_line("Customer: ", customer),
        labeled_line("Part Name: ", resolve(meta, PART_NAME_ALIASES, "N/A")),
        labeled_line("Part Number: ", resolve(meta, PART_NUMBER_ALIASES, "Reviewing...")),
        labeled_line("Revision: ", resolve(meta, REVISION_ALIASES, "01")),
    ]
}

fn labeled_line(label: &str, value: String) -> Block {
    Block::Paragraph {
        runs: vec![Run::bold(label), Run::plain(value)],
    }
}

fn generated_stamp() -> Block {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    Block::Paragraph {
        runs: vec![Run::plain(format!("Generated: {stamp}"))],
    }
}
