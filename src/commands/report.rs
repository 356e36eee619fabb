//! Report command implementation.
//!
//! The report command:
//! 1. Checks the output location
//! 2. Loads the rows
//! 3. Writes the CSV table
//! 4. Writes the rows as JSON
//! 5. Renders the HTML chart (if requested)

use crate::commands::models::{ReportArgs, ReportFiles};
use crate::output::{check_output_location, render_html, write_csv, write_json};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Report command arguments
///
/// # Returns
/// The paths of the files written
///
/// # Errors
/// * Output location missing, not a directory or not writable
/// * Rows file unreadable or not an array of string arrays
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     rows_path: PathBuf::from("rows.json"),
///     output_dir: PathBuf::from("out"),
///     name: "latency".to_string(),
///     html: true,
/// };
///
/// execute_report(args)?;
/// ```
pub fn execute_report(args: ReportArgs) -> Result<ReportFiles> {
    let start_time = Instant::now();

    info!("Generating report '{}' in {}", args.name, args.output_dir.display());

    // Step 1: Output location
    info!("Step 1/5: Checking output location...");
    let output_dir = check_output_location(&args.output_dir)
        .context("Output location is not usable")?;

    // Step 2: Rows
    info!("Step 2/5: Loading rows from {}...", args.rows_path.display());
    let rows = load_rows(&args.rows_path)
        .with_context(|| format!("Failed to load rows from {}", args.rows_path.display()))?;

    debug!("Loaded {} rows", rows.len());

    let files = ReportFiles::new(&output_dir, &args.name, args.html);

    // Step 3: CSV
    info!("Step 3/5: Writing CSV...");
    write_csv(&files.csv, &rows).context("Failed to write report CSV")?;

    info!("✓ CSV written to: {}", files.csv.display());

    // Step 4: JSON
    info!("Step 4/5: Writing JSON...");
    let json = serde_json::to_vec_pretty(&rows).context("Failed to encode rows as JSON")?;
    write_json(&json, &files.json).context("Failed to write report JSON")?;

    info!("✓ JSON written to: {}", files.json.display());

    // Step 5: HTML (if requested)
    if let Some(html_path) = &files.html {
        info!("Step 5/5: Rendering HTML chart...");
        render_html(&files.csv, html_path).context("Failed to render report HTML")?;

        info!("✓ HTML written to: {}", html_path.display());
    } else {
        info!("Step 5/5: Skipping HTML chart (not requested)");
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(files)
}

/// Load rows from a JSON array of string arrays
///
/// **Private** - internal helper for execute_report
fn load_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    let rows = serde_json::from_reader(BufReader::new(file))?;
    Ok(rows)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("Report name cannot be empty");
    }

    if args.name.contains(['/', '\\']) {
        anyhow::bail!("Report name must not contain path separators");
    }

    if args.name == "." || args.name == ".." {
        anyhow::bail!("Report name must be a file name");
    }

    if args.rows_path.as_os_str().is_empty() {
        anyhow::bail!("Rows file path cannot be empty");
    }

    Ok(())
}
