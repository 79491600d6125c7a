//! Document Model Module
//!
//! The logical document tree: block types, static per-section column specs,
//! the table renderer and the composer that assembles one immutable
//! `LogicalDocument` per render. Nothing here mutates shared state; the
//! tree is built bottom-up and handed to the package serializer once.

pub mod block;
pub mod columns;
pub mod compose;
pub mod table;

pub use block::{Block, Cell, LogicalDocument, Run};
pub use columns::{Column, ColumnRole, TableSpec};
pub use compose::compose;
pub use table::{render_table, HIGH_RISK_SHADE, NO_DATA_PLACEHOLDER};
