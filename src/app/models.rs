//! Data models for delimited record processing
//!
//! This module contains the core data structures shared by the parsing,
//! storage and reporting services: typed field values, the schema-ordered
//! record, and the concrete record kinds the tool ships with (inventory
//! items and student results).

use crate::constants::{DATE_FORMAT, DATETIME_FORMAT, grade_bands};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

// =============================================================================
// Field Values
// =============================================================================

/// A single typed field value
///
/// The `Display` impl is the canonical textual form used on report data
/// lines: decimals always carry two decimal places, dates use
/// `YYYY-MM-DD`, and timestamps use `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// Integer content, if this is an integer field
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric content as `f64` for integer and decimal fields
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Text content, if this is a text field
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Date content for date fields
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(v) => Some(*v),
            Self::DateTime(v) => Some(v.date()),
            _ => None,
        }
    }

    /// Timestamp content; date-only fields coerce to midnight
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(v) => Some(*v),
            Self::Date(v) => v.and_hms_opt(0, 0, 0),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{:.2}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Self::DateTime(v) => write!(f, "{}", v.format(DATETIME_FORMAT)),
        }
    }
}

// =============================================================================
// Record
// =============================================================================

/// One validated record: a stable integer key plus schema-ordered field values
///
/// Records are immutable once constructed. [`Record::with_field`] derives a
/// new record with one field replaced; the key is fixed at construction and
/// survives derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: i64,
    fields: Vec<FieldValue>,
}

impl Record {
    /// Create a record from its key and ordered field values
    pub fn new(key: i64, fields: Vec<FieldValue>) -> Self {
        Self { key, fields }
    }

    /// Stable identity of this record within its store
    pub fn key(&self) -> i64 {
        self.key
    }

    /// All field values in schema order
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Field value at `index`, if present
    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index)
    }

    /// Derive a new record with the field at `index` replaced
    pub fn with_field(&self, index: usize, value: FieldValue) -> Self {
        let mut fields = self.fields.clone();
        if index < fields.len() {
            fields[index] = value;
        }
        Self {
            key: self.key,
            fields,
        }
    }
}

// =============================================================================
// Letter Grades
// =============================================================================

/// Letter grade bucket derived from a score
///
/// Buckets are inclusive on their lower edge: 80-100 is an A, 70-79 a B,
/// 60-69 a C, 50-59 a D, everything below an F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades in fixed display order
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Map a score to its grade bucket
    pub fn from_score(score: i64) -> Self {
        if score >= grade_bands::A_MIN {
            Grade::A
        } else if score >= grade_bands::B_MIN {
            Grade::B
        } else if score >= grade_bands::C_MIN {
            Grade::C
        } else if score >= grade_bands::D_MIN {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Grade letter as a static string
    pub fn letter(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

// =============================================================================
// Typed Record Views
// =============================================================================

/// One inventory log entry
///
/// Immutable; the `with_*` methods derive updated copies.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub date_added: NaiveDateTime,
}

impl InventoryItem {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, date_added: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    /// Derive a copy with an updated quantity
    pub fn with_quantity(&self, quantity: i64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Derive a copy with an updated name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// View a validated record through the inventory field layout
    pub fn from_record(record: &Record) -> Result<Self> {
        let fields = record.fields();
        let (id, name, quantity, date_added) = match fields {
            [id, name, quantity, date_added] => (
                id.as_integer(),
                name.as_text(),
                quantity.as_integer(),
                date_added.as_datetime(),
            ),
            _ => (None, None, None, None),
        };
        match (id, name, quantity, date_added) {
            (Some(id), Some(name), Some(quantity), Some(date_added)) => Ok(Self {
                id,
                name: name.to_string(),
                quantity,
                date_added,
            }),
            _ => Err(Error::configuration(
                "record does not match the inventory item field layout",
            )),
        }
    }

    /// Convert back to the schema-ordered record form
    pub fn to_record(&self) -> Record {
        Record::new(
            self.id,
            vec![
                FieldValue::Integer(self.id),
                FieldValue::Text(self.name.clone()),
                FieldValue::Integer(self.quantity),
                FieldValue::DateTime(self.date_added),
            ],
        )
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, DateAdded: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format(DATE_FORMAT)
        )
    }
}

/// One student result row
#[derive(Debug, Clone, PartialEq)]
pub struct StudentResult {
    pub id: i64,
    pub full_name: String,
    pub score: i64,
}

impl StudentResult {
    pub fn new(id: i64, full_name: impl Into<String>, score: i64) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    /// Letter grade for this result
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// View a validated record through the student result field layout
    pub fn from_record(record: &Record) -> Result<Self> {
        let fields = record.fields();
        let (id, full_name, score) = match fields {
            [id, full_name, score] => (id.as_integer(), full_name.as_text(), score.as_integer()),
            _ => (None, None, None),
        };
        match (id, full_name, score) {
            (Some(id), Some(full_name), Some(score)) => Ok(Self {
                id,
                full_name: full_name.to_string(),
                score,
            }),
            _ => Err(Error::configuration(
                "record does not match the student result field layout",
            )),
        }
    }

    /// Convert back to the schema-ordered record form
    pub fn to_record(&self) -> Record {
        Record::new(
            self.id,
            vec![
                FieldValue::Integer(self.id),
                FieldValue::Text(self.full_name.clone()),
                FieldValue::Integer(self.score),
            ],
        )
    }
}

impl fmt::Display for StudentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Score: {}, Grade: {}",
            self.id,
            self.full_name,
            self.score,
            self.grade()
        )
    }
}
