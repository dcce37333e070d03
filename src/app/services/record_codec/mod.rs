//! Schema-driven codec for delimited record lines
//!
//! This module turns raw text lines into validated, typed records and
//! back. Each record kind declares a schema (field order, codec kinds,
//! validation rules, report labels); the parsing code itself never
//! branches on record identity.
//!
//! ## Architecture
//!
//! The codec is organized into logical components:
//! - [`field_codec`] - Single-value parsing for each declared field kind
//! - [`schema`] - Per-record-kind field layout, rules and report labels
//! - [`line_parser`] - Whole-line orchestration with a fixed check order
//!
//! ## Usage
//!
//! ```
//! use recfile_processor::app::services::record_codec::line_parser;
//! use recfile_processor::app::services::record_codec::schema::RecordSchema;
//!
//! let schema = RecordSchema::student_results();
//! let record = line_parser::parse_line("1,Kofi Mensah,85", 1, &schema).unwrap();
//!
//! assert_eq!(record.key(), 1);
//! ```

pub mod field_codec;
pub mod line_parser;
pub mod schema;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_codec::{FieldKind, FormatError};
pub use schema::{FieldSpec, LineTemplate, RecordSchema, SummarySpec, Validator};
