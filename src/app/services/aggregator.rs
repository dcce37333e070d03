//! Summary statistics over a record snapshot
//!
//! [`summarize`] makes a single pass over a store snapshot and computes
//! the numeric summary, bucket distribution and date range declared by
//! the schema. The result is a value computed on demand; nothing here is
//! cached and the snapshot is never mutated. Empty input yields a
//! well-defined empty result.

use crate::app::models::Record;
use crate::app::services::record_codec::schema::RecordSchema;
use chrono::NaiveDateTime;
use tracing::debug;

/// Per-bucket count with a stable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub label: &'static str,
    pub count: usize,
}

/// Numeric field summary
///
/// The mean keeps full precision; rounding to two decimal places happens
/// only where the value is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub total: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Summary statistics for one store snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    /// Number of records in the snapshot
    pub count: usize,

    /// Summary of the schema's numeric summary field; `None` when the
    /// snapshot is empty
    pub numeric: Option<NumericSummary>,

    /// Distribution over the schema's declared buckets, in declared
    /// order. Zero-count buckets are retained; whether a display layer
    /// prints them is its own concern.
    pub buckets: Vec<BucketCount>,

    /// Oldest and newest values of the schema's date field
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
}

/// Compute summary statistics for a snapshot in a single pass
pub fn summarize(records: &[Record], schema: &RecordSchema) -> Aggregate {
    let summary = &schema.summary;

    let mut total = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut numeric_seen = 0_usize;

    let mut bucket_counts: Vec<usize> = summary
        .buckets
        .map(|spec| vec![0; spec.labels.len()])
        .unwrap_or_default();

    let mut oldest: Option<NaiveDateTime> = None;
    let mut newest: Option<NaiveDateTime> = None;

    for record in records {
        let field = record.field(summary.field);

        if let Some(value) = field.and_then(|f| f.as_numeric()) {
            numeric_seen += 1;
            total += value;
            min = min.min(value);
            max = max.max(value);
        } else {
            debug!(
                "Record {} has no numeric value at summary field {}",
                record.key(),
                summary.field
            );
        }

        if let (Some(spec), Some(value)) = (summary.buckets, field) {
            let label = (spec.assign)(value);
            if let Some(index) = spec.labels.iter().position(|l| *l == label) {
                bucket_counts[index] += 1;
            }
        }

        if let Some(date) = summary
            .date_field
            .and_then(|index| record.field(index))
            .and_then(|f| f.as_datetime())
        {
            oldest = Some(oldest.map_or(date, |current| current.min(date)));
            newest = Some(newest.map_or(date, |current| current.max(date)));
        }
    }

    let numeric = (numeric_seen > 0).then(|| NumericSummary {
        total,
        mean: total / numeric_seen as f64,
        min,
        max,
    });

    let buckets = summary
        .buckets
        .map(|spec| {
            spec.labels
                .iter()
                .zip(&bucket_counts)
                .map(|(label, count)| BucketCount {
                    label: *label,
                    count: *count,
                })
                .collect()
        })
        .unwrap_or_default();

    Aggregate {
        count: records.len(),
        numeric,
        buckets,
        date_range: oldest.zip(newest),
    }
}
