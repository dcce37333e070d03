//! Command implementations for the recfile processor CLI
//!
//! This module wires the argument structs to the services: build the
//! selected schema, load under the derived policy, and either write the
//! report, list the malformed lines, or print summary statistics.

use colored::Colorize;
use tracing::{Level, debug, info};

use crate::app::services::aggregator;
use crate::app::services::report_file::writer::format_stat;
use crate::app::services::report_file::{ReportReader, ReportWriter};
use crate::cli::args::{Args, Commands, ProcessArgs, SummaryArgs, ValidateArgs};
use crate::constants::DATE_FORMAT;
use crate::Result;

/// Dispatch the parsed command line
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Process(args) => run_process(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Summary(args) => run_summary(args),
    }
}

/// Install the fmt subscriber at the requested level
fn setup_logging(level: &str) {
    let level = match level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Load the input file and write the formatted report
fn run_process(args: ProcessArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    debug!("Process arguments: {:?}", args);
    args.validate()?;

    let schema = args.schema.schema();
    let reader = ReportReader::new(schema.clone(), args.load_options());
    let outcome = reader.load(&args.input)?;

    if !args.quiet {
        println!(
            "{} Loaded {} of {} data lines from {}",
            "✓".green(),
            outcome.stats.records_loaded,
            outcome.stats.data_lines,
            args.input.display()
        );
        for error in &outcome.stats.errors {
            println!("  {} {}", "✗".red(), error);
        }
    }

    let writer = ReportWriter::new(schema);
    writer.save(&args.output, &outcome.records)?;
    info!("Report written to {}", args.output.display());

    if !args.quiet {
        println!(
            "{} Report written to {}",
            "✓".green(),
            args.output.display()
        );
    }
    Ok(())
}

/// Parse the input file and report malformed lines without writing
fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    debug!("Validate arguments: {:?}", args);
    args.validate()?;

    let reader = ReportReader::new(args.schema.schema(), args.load_options());
    let outcome = reader.load(&args.input)?;

    if args.quiet {
        return Ok(());
    }

    if outcome.stats.is_clean() {
        println!(
            "{} {} is valid: {} records",
            "✓".green(),
            args.input.display(),
            outcome.stats.records_loaded
        );
    } else {
        println!(
            "{} {} malformed line(s) in {} ({:.1}% of data lines loaded)",
            "✗".red(),
            outcome.stats.lines_skipped,
            args.input.display(),
            outcome.stats.success_rate()
        );
        for error in &outcome.stats.errors {
            println!("  {} {}", "✗".red(), error);
        }
    }
    Ok(())
}

/// Load the input file and print summary statistics
fn run_summary(args: SummaryArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    debug!("Summary arguments: {:?}", args);
    args.validate()?;

    let schema = args.schema.schema();
    let reader = ReportReader::new(schema.clone(), args.load_options());
    let outcome = reader.load(&args.input)?;

    let aggregate = aggregator::summarize(&outcome.records, &schema);

    if args.quiet {
        return Ok(());
    }

    println!("=== {} SUMMARY ===", schema.title);
    println!("Total Records: {}", aggregate.count);

    match &aggregate.numeric {
        Some(numeric) => {
            let label = schema.summary.label;
            let kind = schema.fields[schema.summary.field].kind;
            println!("Total {}: {}", label, format_stat(numeric.total, kind));
            println!("Average {}: {:.2}", label, numeric.mean);
            println!("Highest {}: {}", label, format_stat(numeric.max, kind));
            println!("Lowest {}: {}", label, format_stat(numeric.min, kind));
        }
        None => println!("No records to analyze."),
    }

    // zero-count buckets stay in the data but are noise on a console
    if let Some(spec) = schema.summary.buckets {
        for bucket in aggregate.buckets.iter().filter(|b| b.count > 0) {
            println!("{} {}: {}", spec.item_label, bucket.label, bucket.count);
        }
    }

    if let Some((oldest, newest)) = aggregate.date_range {
        println!("Oldest Entry: {}", oldest.format(DATE_FORMAT));
        println!("Newest Entry: {}", newest.format(DATE_FORMAT));
    }

    if !outcome.stats.is_clean() {
        println!(
            "{} {} malformed line(s) were skipped",
            "✗".red(),
            outcome.stats.lines_skipped
        );
    }
    Ok(())
}
