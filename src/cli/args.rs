//! Command-line argument definitions for the recfile processor
//!
//! This module defines the CLI interface using the clap derive API:
//! three subcommands sharing a schema selector, an error-mode selector
//! and the usual verbosity flags.

use crate::config::{LoadOptions, LoadPolicy, MissingFilePolicy};
use crate::{Error, RecordSchema, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the recfile processor
///
/// Validates delimited record files against a declared schema and writes
/// fixed-layout reports with computed summary statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recfile-processor",
    version,
    about = "Validate delimited record files and write summary reports",
    long_about = "Reads delimited record files (inventory logs, student result files), \
                  validates every line against the selected schema, and either rewrites \
                  the records as a fixed-layout report with summary statistics or reports \
                  the malformed lines."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the recfile processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a record file and write the formatted report
    Process(ProcessArgs),
    /// Parse a record file and report malformed lines without writing
    Validate(ValidateArgs),
    /// Load a record file and print its summary statistics
    Summary(SummaryArgs),
}

/// Arguments for the process command (load, then write the report)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input record file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Output report file (atomically replaced on success)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Record schema to validate against
    #[arg(short = 's', long = "schema", value_enum)]
    pub schema: SchemaKind,

    /// What to do with malformed lines
    ///
    /// Defaults per schema: student results abort on the first malformed
    /// line, the inventory log skips malformed lines and keeps going.
    #[arg(long = "on-error", value_enum, value_name = "MODE")]
    pub on_error: Option<ErrorMode>,

    /// Treat a missing input file as an empty data set
    #[arg(long = "allow-missing")]
    pub allow_missing: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the validate command (parse only, write nothing)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input record file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Record schema to validate against
    #[arg(short = 's', long = "schema", value_enum)]
    pub schema: SchemaKind,

    /// Stop at the first malformed line instead of listing all of them
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the summary command (load, then print statistics)
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Input record file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Record schema to validate against
    #[arg(short = 's', long = "schema", value_enum)]
    pub schema: SchemaKind,

    /// What to do with malformed lines (defaults per schema)
    #[arg(long = "on-error", value_enum, value_name = "MODE")]
    pub on_error: Option<ErrorMode>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Selectable record schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// Pipe-delimited inventory log (id, name, quantity, date added)
    Inventory,
    /// Comma-delimited student results (id, full name, score)
    StudentResults,
}

impl SchemaKind {
    /// Build the schema declaration for this kind
    pub fn schema(&self) -> RecordSchema {
        match self {
            SchemaKind::Inventory => RecordSchema::inventory(),
            SchemaKind::StudentResults => RecordSchema::student_results(),
        }
    }

    /// Error mode used when the caller does not pick one
    pub fn default_error_mode(&self) -> ErrorMode {
        match self {
            // partial recovery of good inventory records beats total failure
            SchemaKind::Inventory => ErrorMode::Skip,
            // a malformed academic record must not produce a partial report
            SchemaKind::StudentResults => ErrorMode::Abort,
        }
    }
}

/// Malformed-line handling selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ErrorMode {
    /// Stop at the first malformed line
    Abort,
    /// Skip malformed lines and report them at the end
    Skip,
}

impl ErrorMode {
    pub fn policy(&self) -> LoadPolicy {
        match self {
            ErrorMode::Abort => LoadPolicy::AbortOnFirstError,
            ErrorMode::Skip => LoadPolicy::SkipAndCollect,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Map a verbosity count and quiet flag to a log level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Check that an input path is usable before any file is opened
fn validate_input(input: &PathBuf, allow_missing: bool) -> Result<()> {
    if !allow_missing && !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }
    if input.exists() && input.is_dir() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }
    Ok(())
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input, self.allow_missing)?;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }

    /// Load options derived from the flags and schema defaults
    pub fn load_options(&self) -> LoadOptions {
        let mode = self.on_error.unwrap_or(self.schema.default_error_mode());
        let missing_file = if self.allow_missing {
            MissingFilePolicy::StartEmpty
        } else {
            MissingFilePolicy::Fail
        };
        LoadOptions {
            policy: mode.policy(),
            missing_file,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input, false)
    }

    /// Load options: list every malformed line unless told to fail fast
    pub fn load_options(&self) -> LoadOptions {
        let policy = if self.fail_fast {
            LoadPolicy::AbortOnFirstError
        } else {
            LoadPolicy::SkipAndCollect
        };
        LoadOptions {
            policy,
            missing_file: MissingFilePolicy::Fail,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl SummaryArgs {
    /// Validate the summary command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input, false)
    }

    /// Load options derived from the flags and schema defaults
    pub fn load_options(&self) -> LoadOptions {
        let mode = self.on_error.unwrap_or(self.schema.default_error_mode());
        LoadOptions {
            policy: mode.policy(),
            missing_file: MissingFilePolicy::Fail,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}
