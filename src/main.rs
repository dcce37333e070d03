use clap::Parser;
use recfile_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Recfile Processor - Delimited Record File Validator");
    println!("===================================================");
    println!();
    println!("Validate delimited record files against a declared schema and write");
    println!("fixed-layout reports with computed summary statistics.");
    println!();
    println!("USAGE:");
    println!("    recfile-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Load a record file and write the formatted report");
    println!("    validate    Parse a record file and report malformed lines");
    println!("    summary     Load a record file and print summary statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Rewrite an inventory log, skipping malformed lines:");
    println!("    recfile-processor process -s inventory -i inventory_data.txt -o report.txt");
    println!();
    println!("    # Grade a student result file (aborts on the first malformed line):");
    println!("    recfile-processor process -s student-results -i students.txt -o report.txt");
    println!();
    println!("    # List every malformed line without writing anything:");
    println!("    recfile-processor validate -s student-results -i students.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    recfile-processor <COMMAND> --help");
}
