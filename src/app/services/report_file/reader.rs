//! Report file reading
//!
//! Opens a record file, classifies missing-file and permission failures
//! distinctly from other I/O errors, finds the schema's section marker,
//! and feeds every subsequent non-blank line to the line parser with its
//! physical 1-based line number. Malformed lines are handled according
//! to the configured [`LoadPolicy`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use super::stats::{LoadOutcome, LoadStats};
use crate::app::services::record_codec::line_parser;
use crate::app::services::record_codec::schema::RecordSchema;
use crate::app::services::record_store::RecordStore;
use crate::config::{LoadOptions, LoadPolicy, MissingFilePolicy};
use crate::{Error, Result};

/// Reads record report files for one schema under an explicit error policy
#[derive(Debug, Clone)]
pub struct ReportReader {
    schema: RecordSchema,
    options: LoadOptions,
}

impl ReportReader {
    /// Create a reader for one schema and load policy
    pub fn new(schema: RecordSchema, options: LoadOptions) -> Self {
        Self { schema, options }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Load and parse the file
    ///
    /// A missing file is an empty outcome or an error depending on the
    /// configured [`MissingFilePolicy`]; permission failures and other
    /// I/O errors are always fatal.
    pub fn load(&self, path: &Path) -> Result<LoadOutcome> {
        info!(
            "Loading {} records from {}",
            self.schema.name,
            path.display()
        );

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if self.options.missing_file == MissingFilePolicy::StartEmpty {
                    warn!("File not found: {}, starting empty", path.display());
                    return Ok(LoadOutcome {
                        records: Vec::new(),
                        stats: LoadStats::new(),
                    });
                }
                return Err(Error::file_not_found(path.display().to_string()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::access_denied(path.display().to_string(), e));
            }
            Err(e) => {
                return Err(Error::io(
                    format!("failed to read {}", path.display()),
                    e,
                ));
            }
        };

        self.parse_content(&content, path)
    }

    /// Load the file and replace the store contents
    ///
    /// The store is only touched after the whole file has parsed under
    /// the configured policy; on any error (including a missing file
    /// under [`MissingFilePolicy::StartEmpty`]) its contents are left
    /// exactly as they were.
    pub fn load_into(&self, store: &mut RecordStore, path: &Path) -> Result<LoadStats> {
        if self.options.missing_file == MissingFilePolicy::StartEmpty && !path.exists() {
            warn!("File not found: {}, keeping store as it is", path.display());
            return Ok(LoadStats::new());
        }
        let outcome = self.load(path)?;
        store.replace_all(outcome.records);
        Ok(outcome.stats)
    }

    /// Parse file content: skip the preamble, then drive the line parser
    fn parse_content(&self, content: &str, path: &Path) -> Result<LoadOutcome> {
        let lines: Vec<&str> = content.lines().collect();

        let marker = self.schema.section_label;
        let marker_position = lines
            .iter()
            .position(|line| line.trim() == marker)
            .ok_or_else(|| Error::missing_section_marker(path.display().to_string(), marker))?;

        // data begins after the marker and the separator line under it
        let data_start = marker_position + 2;

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for (index, raw) in lines.iter().enumerate().skip(data_start) {
            if raw.trim().is_empty() {
                continue;
            }
            stats.data_lines += 1;
            let line_number = index + 1;

            match line_parser::parse_line(raw, line_number, &self.schema) {
                Ok(record) => {
                    records.push(record);
                    stats.records_loaded += 1;
                }
                Err(e) => match self.options.policy {
                    LoadPolicy::AbortOnFirstError => return Err(e),
                    LoadPolicy::SkipAndCollect => {
                        warn!("Skipping malformed line {}: {}", line_number, e);
                        stats.lines_skipped += 1;
                        stats.errors.push(e.to_string());
                    }
                },
            }
        }

        info!(
            "Loaded {} of {} data lines from {}",
            stats.records_loaded,
            stats.data_lines,
            path.display()
        );

        Ok(LoadOutcome { records, stats })
    }
}
