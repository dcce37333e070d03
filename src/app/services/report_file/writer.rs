//! Report file writing
//!
//! Renders the fixed report layout - header, section marker, one line
//! per record in store order, then any schema-declared distribution and
//! statistics sections - and atomically replaces the output file. The
//! report is written to a temp file in the target directory first, so a
//! consumer never observes a partially-written report.

use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::Local;
use tempfile::NamedTempFile;
use tracing::info;

use crate::app::models::Record;
use crate::app::services::aggregator::{self, Aggregate};
use crate::app::services::record_codec::field_codec::FieldKind;
use crate::app::services::record_codec::schema::{LineTemplate, RecordSchema};
use crate::constants::{DATETIME_FORMAT, section_separator};
use crate::{Error, Result};

/// Writes record report files for one schema
#[derive(Debug, Clone)]
pub struct ReportWriter {
    schema: RecordSchema,
}

impl ReportWriter {
    /// Create a writer for one schema
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Render the report and atomically replace the output file
    pub fn save(&self, path: &Path, records: &[Record]) -> Result<()> {
        let report = self.render(records);

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(directory)
            .map_err(|e| classify_write_error(path, "create temporary report file", e))?;
        temp.write_all(report.as_bytes())
            .map_err(|e| classify_write_error(path, "write report", e))?;
        temp.persist(path)
            .map_err(|e| classify_write_error(path, "replace report file", e.error))?;

        info!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Render the full report to a string
    pub fn render(&self, records: &[Record]) -> String {
        let mut out = String::new();

        // header
        out.push_str(&format!("=== {} ===\n", self.schema.title));
        out.push_str(&format!(
            "{}: {}\n",
            self.schema.timestamp_label,
            Local::now().format(DATETIME_FORMAT)
        ));
        out.push_str(&format!("{}: {}\n", self.schema.count_label, records.len()));
        out.push('\n');

        // body
        out.push_str(self.schema.section_label);
        out.push('\n');
        out.push_str(&section_separator(self.schema.section_label));
        out.push('\n');
        for record in records {
            out.push_str(&self.format_line(record));
            out.push('\n');
        }

        if self.schema.summary.write_to_report {
            let aggregate = aggregator::summarize(records, &self.schema);
            self.push_summary_sections(&mut out, &aggregate);
        }

        out
    }

    /// Render one record according to the schema's line template
    fn format_line(&self, record: &Record) -> String {
        match self.schema.line_template {
            LineTemplate::Delimited => {
                let delimiter = self.schema.delimiter.to_string();
                record
                    .fields()
                    .iter()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>()
                    .join(&delimiter)
            }
            LineTemplate::Custom(format_record) => format_record(record),
        }
    }

    /// Append the distribution and statistics sections
    fn push_summary_sections(&self, out: &mut String, aggregate: &Aggregate) {
        if let Some(buckets) = self.schema.summary.buckets {
            out.push('\n');
            out.push_str(buckets.section_label);
            out.push('\n');
            out.push_str(&section_separator(buckets.section_label));
            out.push('\n');
            for bucket in &aggregate.buckets {
                out.push_str(&format!(
                    "{} {}: {} {}\n",
                    buckets.item_label, bucket.label, bucket.count, buckets.item_suffix
                ));
            }
        }

        let statistics_label = self.schema.statistics_label();
        out.push('\n');
        out.push_str(statistics_label);
        out.push('\n');
        out.push_str(&section_separator(statistics_label));
        out.push('\n');

        if let Some(numeric) = &aggregate.numeric {
            let label = self.schema.summary.label;
            let kind = self.schema.fields[self.schema.summary.field].kind;
            out.push_str(&format!("Average {}: {:.2}\n", label, numeric.mean));
            out.push_str(&format!(
                "Highest {}: {}\n",
                label,
                format_stat(numeric.max, kind)
            ));
            out.push_str(&format!(
                "Lowest {}: {}\n",
                label,
                format_stat(numeric.min, kind)
            ));
        }
    }
}

/// Display a min/max/total statistic in the summary field's own format
pub fn format_stat(value: f64, kind: FieldKind) -> String {
    match kind {
        FieldKind::Integer => format!("{}", value as i64),
        _ => format!("{:.2}", value),
    }
}

/// Map a write-side I/O failure onto the crate error kinds
fn classify_write_error(path: &Path, action: &str, error: std::io::Error) -> Error {
    if error.kind() == ErrorKind::PermissionDenied {
        Error::access_denied(path.display().to_string(), error)
    } else {
        Error::io(format!("failed to {} for {}", action, path.display()), error)
    }
}
