//! Record schema declarations
//!
//! A schema is the complete description of one record kind: the ordered
//! field list with codec kinds and validation rules, the delimiter and
//! expected field count, the labels of the written report, the body line
//! template, and which field feeds summary statistics. The two concrete
//! schemas the tool ships with are declared here; everything else in the
//! codec is generic over them.

use super::field_codec::FieldKind;
use crate::app::models::{FieldValue, Grade, Record, StudentResult};
use crate::constants::{STATISTICS_SECTION_LABEL, SCORE_MAX, SCORE_MIN, inventory, student};

/// A validation rule applied to a parsed field value
///
/// Rules run in declared order after every field of a line has parsed;
/// the first failing rule determines the reported error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Text must contain at least one non-whitespace character
    NonEmpty,
    /// Numeric value must be zero or greater
    NonNegative,
    /// Integer value must lie within the inclusive range
    Range { min: i64, max: i64 },
}

impl Validator {
    /// Check a parsed value; the message names the violated rule
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            Validator::NonEmpty => {
                if value.as_text().is_some_and(|text| text.trim().is_empty()) {
                    return Err("must not be empty".to_string());
                }
            }
            Validator::NonNegative => {
                if let Some(number) = value.as_numeric() {
                    if number < 0.0 {
                        return Err("must not be negative".to_string());
                    }
                }
            }
            Validator::Range { min, max } => {
                if let Some(number) = value.as_integer() {
                    if number < *min || number > *max {
                        return Err(format!("out of valid range ({}-{})", min, max));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Declared layout of one field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub validators: Vec<Validator>,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            validators: Vec::new(),
        }
    }

    /// Append a validation rule, keeping declaration order
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// How the writer renders one record on a report body line
#[derive(Debug, Clone, Copy)]
pub enum LineTemplate {
    /// Delimiter-joined field values in schema order; loads back as-is
    Delimited,
    /// Free-text rendering; the written report is presentation-only
    Custom(fn(&Record) -> String),
}

/// Fixed, ordered bucket list for categorical distribution counts
#[derive(Debug, Clone, Copy)]
pub struct BucketSpec {
    /// Report section label for the distribution table
    pub section_label: &'static str,
    /// Word before the bucket label on each line ("Grade")
    pub item_label: &'static str,
    /// Word after the count on each line ("students")
    pub item_suffix: &'static str,
    /// Every bucket in display order; zero counts are retained
    pub labels: &'static [&'static str],
    /// Assign a summary-field value to one of `labels`
    pub assign: fn(&FieldValue) -> &'static str,
}

/// Which field feeds numeric summaries and how it is reported
#[derive(Debug, Clone, Copy)]
pub struct SummarySpec {
    /// Index of the numeric field to summarize
    pub field: usize,
    /// Display name of that field ("Score", "Quantity")
    pub label: &'static str,
    /// Distribution buckets derived from the summary field
    pub buckets: Option<BucketSpec>,
    /// Index of a date field tracked as an oldest/newest range
    pub date_field: Option<usize>,
    /// Whether the written report carries distribution/statistics sections
    pub write_to_report: bool,
}

/// Complete declaration for one record kind
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Short machine name ("inventory", "student-results")
    pub name: &'static str,
    /// Report title inside the `=== ... ===` header line
    pub title: &'static str,
    /// Label of the header timestamp line ("Saved on", "Generated on")
    pub timestamp_label: &'static str,
    /// Label of the header count line ("Total Items", "Total Students")
    pub count_label: &'static str,
    /// Literal data section marker the reader scans for
    pub section_label: &'static str,
    pub delimiter: char,
    /// Index of the integer field that is the record's stable key
    pub key_field: usize,
    pub fields: Vec<FieldSpec>,
    pub line_template: LineTemplate,
    pub summary: SummarySpec,
}

impl RecordSchema {
    /// Number of fields every data line must carry
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Pipe-delimited inventory log: id, name, quantity, date added
    pub fn inventory() -> Self {
        Self {
            name: "inventory",
            title: inventory::TITLE,
            timestamp_label: inventory::TIMESTAMP_LABEL,
            count_label: inventory::COUNT_LABEL,
            section_label: inventory::SECTION_LABEL,
            delimiter: inventory::DELIMITER,
            key_field: 0,
            fields: vec![
                FieldSpec::new("ID", FieldKind::Integer),
                FieldSpec::new("Name", FieldKind::Text).with_validator(Validator::NonEmpty),
                FieldSpec::new("Quantity", FieldKind::Integer)
                    .with_validator(Validator::NonNegative),
                FieldSpec::new("DateAdded", FieldKind::DateTime),
            ],
            line_template: LineTemplate::Delimited,
            summary: SummarySpec {
                field: 2,
                label: "Quantity",
                buckets: None,
                date_field: Some(3),
                write_to_report: false,
            },
        }
    }

    /// Comma-delimited student results: id, full name, score
    pub fn student_results() -> Self {
        Self {
            name: "student-results",
            title: student::TITLE,
            timestamp_label: student::TIMESTAMP_LABEL,
            count_label: student::COUNT_LABEL,
            section_label: student::SECTION_LABEL,
            delimiter: student::DELIMITER,
            key_field: 0,
            fields: vec![
                FieldSpec::new("ID", FieldKind::Integer),
                FieldSpec::new("FullName", FieldKind::Text).with_validator(Validator::NonEmpty),
                FieldSpec::new("Score", FieldKind::Integer).with_validator(Validator::Range {
                    min: SCORE_MIN,
                    max: SCORE_MAX,
                }),
            ],
            line_template: LineTemplate::Custom(student_result_line),
            summary: SummarySpec {
                field: 2,
                label: "Score",
                buckets: Some(BucketSpec {
                    section_label: student::DISTRIBUTION_SECTION_LABEL,
                    item_label: "Grade",
                    item_suffix: "students",
                    labels: &["A", "B", "C", "D", "F"],
                    assign: grade_bucket,
                }),
                date_field: None,
                write_to_report: true,
            },
        }
    }

    /// Label of the statistics section in written reports
    pub fn statistics_label(&self) -> &'static str {
        STATISTICS_SECTION_LABEL
    }
}

/// Report body line for one student result
fn student_result_line(record: &Record) -> String {
    match StudentResult::from_record(record) {
        Ok(result) => format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            result.full_name,
            result.id,
            result.score,
            result.grade()
        ),
        // records reaching the writer were validated against this schema;
        // joined fields keep the line readable for a foreign record
        Err(_) => record
            .fields()
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Bucket assignment for the score distribution table
fn grade_bucket(value: &FieldValue) -> &'static str {
    Grade::from_score(value.as_integer().unwrap_or(0)).letter()
}
