//! Report file reading and writing
//!
//! Record files share one fixed layout: a short header (title line,
//! timestamp line, count line), a literal section-marker line followed
//! by an `=` separator, one record per line, and - for schemas that ask
//! for it - computed distribution and statistics sections. The reader
//! skips the preamble up to the marker and drives the line parser under
//! an explicit error policy; the writer renders the whole report and
//! atomically replaces the output file.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use recfile_processor::app::services::report_file::ReportReader;
//! use recfile_processor::config::LoadOptions;
//! use recfile_processor::RecordSchema;
//!
//! # fn main() -> recfile_processor::Result<()> {
//! let reader = ReportReader::new(RecordSchema::inventory(), LoadOptions::lenient());
//! let outcome = reader.load(Path::new("inventory_data.txt"))?;
//!
//! println!(
//!     "loaded {} records, skipped {}",
//!     outcome.stats.records_loaded, outcome.stats.lines_skipped
//! );
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::ReportReader;
pub use stats::{LoadOutcome, LoadStats};
pub use writer::ReportWriter;
