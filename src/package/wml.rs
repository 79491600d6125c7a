//! Block tree to WordprocessingML markup.
//!
//! Emits the main document part only; styling is direct formatting (bold,
//! size, cell shading) plus `Heading<N>` paragraph styles, which keeps the
//! package free of a styles part while remaining readable by standard
//! consumers. All text and attribute values are escaped.

use crate::document::{Block, Cell, LogicalDocument, Run};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Half-point font sizes per heading level (Word's `w:sz` unit).
fn heading_size(level: u8) -> u32 {
    match level {
        1 => 32,
        2 => 26,
        _ => 24,
    }
}

pub fn document_xml(doc: &LogicalDocument) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!("<w:document xmlns:w=\"{W_NS}\"><w:body>"));
    for block in &doc.blocks {
        write_block(&mut xml, block);
    }
    xml.push_str("</w:body></w:document>");
    xml
}

fn write_block(xml: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => write_heading(xml, *level, text),
        Block::Paragraph { runs } => write_paragraph(xml, runs),
        Block::Table { header, header_shade, rows } => {
            write_table(xml, header, header_shade, rows)
        }
    }
}

fn write_heading(xml: &mut String, level: u8, text: &str) {
    xml.push_str("<w:p><w:pPr>");
    xml.push_str(&format!("<w:pStyle w:val=\"Heading{level}\"/>"));
    xml.push_str("</w:pPr><w:r><w:rPr><w:b/>");
    xml.push_str(&format!("<w:sz w:val=\"{}\"/>", heading_size(level)));
    xml.push_str("</w:rPr>");
    write_text(xml, text);
    xml.push_str("</w:r></w:p>");
}

fn write_paragraph(xml: &mut String, runs: &[Run]) {
    xml.push_str("<w:p>");
    for run in runs {
        write_run(xml, run);
    }
    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r>");
    if run.bold || run.color.is_some() {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if let Some(color) = &run.color {
            xml.push_str(&format!("<w:color w:val=\"{}\"/>", escape_attr(color)));
        }
        xml.push_str("</w:rPr>");
    }
    write_text(xml, &run.text);
    xml.push_str("</w:r>");
}

fn write_text(xml: &mut String, text: &str) {
    xml.push_str("<w:t xml:space=\"preserve\">");
    xml.push_str(&escape_text(text));
    xml.push_str("</w:t>");
}

fn write_table(xml: &mut String, header: &[String], header_shade: &str, rows: &[Vec<Cell>]) {
    xml.push_str("<w:tbl><w:tblPr>");
    xml.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>");
    xml.push_str("<w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        xml.push_str(&format!(
            "<w:{edge} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>"
        ));
    }
    xml.push_str("</w:tblBorders></w:tblPr><w:tblGrid>");
    for _ in header {
        xml.push_str("<w:gridCol/>");
    }
    xml.push_str("</w:tblGrid>");

    // Header row: bold text on the section tint.
    xml.push_str("<w:tr>");
    for title in header {
        write_cell(xml, title, Some(header_shade), true);
    }
    xml.push_str("</w:tr>");

    for row in rows {
        xml.push_str("<w:tr>");
        for cell in row {
            write_cell(xml, &cell.text, cell.shade.as_deref(), false);
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    // Word requires a paragraph between/after tables.
    xml.push_str("<w:p/>");
}

fn write_cell(xml: &mut String, text: &str, shade: Option<&str>, bold: bool) {
    xml.push_str("<w:tc>");
    if let Some(fill) = shade {
        xml.push_str(&format!(
            "<w:tcPr><w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/></w:tcPr>",
            escape_attr(fill)
        ));
    }
    xml.push_str("<w:p><w:r>");
    if bold {
        xml.push_str("<w:rPr><w:b/></w:rPr>");
    }
    write_text(xml, text);
    xml.push_str("</w:r></w:p></w:tc>");
}

fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
