//! Report Writer CLI
//!
//! Writes CSV, JSON and HTML chart reports from a rows file and
//! checks output locations.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use report_writer::commands::{
    check_location, default_report_name, display_version, execute_report, render_chart,
    validate_args, ReportArgs,
};

/// Report Writer - CSV, HTML and JSON report output
#[derive(Parser, Debug)]
#[command(name = "report-writer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write CSV and JSON (and optionally HTML) reports from a rows file
    Report {
        /// JSON file holding an array of string arrays
        #[arg(short, long)]
        rows: PathBuf,

        /// Directory that receives the report files
        #[arg(short, long, env = "REPORT_OUTPUT", default_value = ".")]
        output: PathBuf,

        /// File stem for the report files (defaults to report_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Also render an HTML chart
        #[arg(long)]
        html: bool,
    },

    /// Check that a directory can receive report files
    Check {
        /// Directory to check
        dir: PathBuf,
    },

    /// Render an HTML chart from an existing CSV file
    Render {
        /// Source CSV file
        #[arg(short, long)]
        csv: PathBuf,

        /// Output HTML file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            rows,
            output,
            name,
            html,
        } => {
            let args = ReportArgs {
                rows_path: rows,
                output_dir: output,
                name: name.unwrap_or_else(default_report_name),
                html,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Check { dir } => {
            check_location(&dir)?;
        }

        Commands::Render { csv, output } => {
            render_chart(&csv, &output)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
