//! Report Input Module
//!
//! Everything between the raw caller payload and normalized, resolvable
//! records: payload types, section normalization, tolerant field resolution
//! and RPN risk scoring.

pub mod payload;
pub mod resolve;
pub mod risk;

pub use payload::{NormalizedPayload, Record, ReportPayload, SectionKind};
pub use resolve::{resolve, resolve_number};
pub use risk::RiskScore;
