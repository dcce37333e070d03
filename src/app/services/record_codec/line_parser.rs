//! Whole-line parsing against a schema
//!
//! The check order is a fixed, observable contract: field count first,
//! then trimmed emptiness, then per-field type conversion, then the
//! schema's validation rules. A line with both a wrong field count and an
//! out-of-range value always reports the field-count error.

use super::schema::RecordSchema;
use crate::app::models::{FieldValue, Record};
use crate::{Error, Result};
use tracing::trace;

/// Parse one raw line into a validated record
///
/// `line_number` is the physical, 1-based line number in the source file
/// and is carried into every error for that line.
pub fn parse_line(raw: &str, line_number: usize, schema: &RecordSchema) -> Result<Record> {
    trace!("Parsing line {}: {}", line_number, raw);

    // Structural check before anything field-level
    let parts: Vec<&str> = raw.split(schema.delimiter).collect();
    if parts.len() != schema.field_count() {
        return Err(Error::missing_field(
            line_number,
            format!(
                "has {} fields, expected {}",
                parts.len(),
                schema.field_count()
            ),
            raw,
        ));
    }

    let trimmed: Vec<&str> = parts.iter().map(|part| part.trim()).collect();
    for (spec, value) in schema.fields.iter().zip(&trimmed) {
        if value.is_empty() {
            return Err(Error::missing_field(
                line_number,
                format!("field '{}' is empty", spec.name),
                raw,
            ));
        }
    }

    // Type conversion, first failure wins
    let mut fields: Vec<FieldValue> = Vec::with_capacity(schema.field_count());
    for (spec, value) in schema.fields.iter().zip(&trimmed) {
        let parsed = spec
            .kind
            .parse(value)
            .map_err(|e| Error::invalid_format(line_number, spec.name, *value, e.message))?;
        fields.push(parsed);
    }

    // Validation rules, declared order, first failure wins
    for (spec, value) in schema.fields.iter().zip(&fields) {
        for validator in &spec.validators {
            validator.check(value).map_err(|message| {
                Error::invalid_format(line_number, spec.name, value.to_string(), message)
            })?;
        }
    }

    let key = fields[schema.key_field].as_integer().ok_or_else(|| {
        Error::configuration(format!(
            "schema '{}' declares non-integer field {} as its key",
            schema.name, schema.key_field
        ))
    })?;

    Ok(Record::new(key, fields))
}
