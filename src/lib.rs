//! Recfile Processor Library
//!
//! A Rust library for reading, validating and reporting on delimited
//! flat-file record data.
//!
//! This library provides tools for:
//! - Parsing record report files with proper header/data section handling
//! - Validating each field against a declared schema (type and rules)
//! - Skipping or aborting on malformed lines according to explicit policy
//! - Holding validated records in an arrival-ordered in-memory store
//! - Writing fixed-layout reports with computed summary statistics
//! - Comprehensive error handling with line-level context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod record_codec;
        pub mod record_store;
        pub mod report_file;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FieldValue, Grade, InventoryItem, Record, StudentResult};
pub use app::services::record_codec::schema::RecordSchema;
pub use config::{LoadOptions, LoadPolicy, MissingFilePolicy};

/// Result type alias for the recfile processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for record file processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source path does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Permission was refused for a read or write
    #[error("Access denied: {path}")]
    AccessDenied {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line had the wrong field count or an empty required field
    #[error("Line {line_number}: {message}. Content: '{content}'")]
    MissingField {
        line_number: usize,
        message: String,
        content: String,
    },

    /// A field's text failed type conversion or a validation rule
    #[error("Line {line_number}: invalid value '{value}' for field '{field}': {message}")]
    InvalidFormat {
        line_number: usize,
        field: String,
        value: String,
        message: String,
    },

    /// Report file never reaches the schema's data section label
    #[error("No '{marker}' section marker found in file: {path}")]
    MissingSectionMarker { path: String, marker: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an access denied error
    pub fn access_denied(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::AccessDenied {
            path: path.into(),
            source,
        }
    }

    /// Create a missing field error for one source line
    pub fn missing_field(
        line_number: usize,
        message: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::MissingField {
            line_number,
            message: message.into(),
            content: content.into(),
        }
    }

    /// Create an invalid format error for one field of one source line
    pub fn invalid_format(
        line_number: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            line_number,
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a missing section marker error
    pub fn missing_section_marker(path: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::MissingSectionMarker {
            path: path.into(),
            marker: marker.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Source line number for line-level errors, if any
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MissingField { line_number, .. } | Self::InvalidFormat { line_number, .. } => {
                Some(*line_number)
            }
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
