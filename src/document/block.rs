//! Logical document blocks.
//!
//! A `LogicalDocument` is an ordered block list with no knowledge of the
//! target markup; the package serializer owns the translation to
//! WordprocessingML.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalDocument {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    Table {
        header: Vec<String>,
        /// Hex RGB fill for the header row, section-specific.
        header_shade: String,
        rows: Vec<Vec<Cell>>,
    },
}

/// One styled text span inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub color: Option<String>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: false, color: None }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { text: text.into(), bold: true, color: None }
    }
}

/// One table cell. `shade` carries a hex RGB fill (high-risk tint).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub shade: Option<String>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), shade: None }
    }

    pub fn shaded(text: impl Into<String>, shade: impl Into<String>) -> Self {
        Self { text: text.into(), shade: Some(shade.into()) }
    }
}
