//! Single-value parsing for schema fields
//!
//! Each field kind is total on its declared legal range and rejects
//! anything else; values are never clamped or truncated. The formatting
//! half of the codec is the `Display` impl on
//! [`FieldValue`](crate::app::models::FieldValue), which the writer uses
//! to render data lines.

use crate::app::models::FieldValue;
use crate::constants::{DATE_FORMAT, DATETIME_FORMAT, DATETIME_FORMAT_MINUTES};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Failure to convert raw text into the declared field kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FormatError {}

/// Declared type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Decimal,
    Text,
    Date,
    DateTime,
}

impl FieldKind {
    /// Kind name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::DateTime => "timestamp",
        }
    }

    /// Parse raw (already trimmed) text into a typed value
    ///
    /// The caller attaches line and field context; messages here only
    /// describe what the text failed to be.
    pub fn parse(&self, raw: &str) -> Result<FieldValue, FormatError> {
        match self {
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| FormatError::new("must be a whole number")),
            FieldKind::Decimal => {
                let value = raw
                    .parse::<f64>()
                    .map_err(|_| FormatError::new("must be a decimal number"))?;
                if !value.is_finite() {
                    return Err(FormatError::new("must be a finite decimal number"));
                }
                Ok(FieldValue::Decimal(value))
            }
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(FieldValue::Date)
                .map_err(|_| FormatError::new("expected date as 'YYYY-MM-DD'")),
            FieldKind::DateTime => {
                if let Ok(value) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
                    Ok(FieldValue::DateTime(value))
                } else if let Ok(value) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_MINUTES)
                {
                    Ok(FieldValue::DateTime(value))
                } else {
                    Err(FormatError::new(
                        "expected timestamp as 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD HH:MM'",
                    ))
                }
            }
        }
    }
}
