use anyhow::{Context, Result};
use crate::output::{check_output_location, render_html};
use crate::utils::config::CHART_TEMPLATE;
use std::path::Path;

/// Check an output location and report the result
pub fn check_location(path: &Path) -> Result<()> {
    println!("Checking output location: {}", path.display());

    let checked = check_output_location(path)?;

    println!("✓ Output location is usable");
    println!("  Path: {}", checked.display());

    Ok(())
}

/// Render an HTML chart from an existing CSV file
pub fn render_chart(csv_path: &Path, html_path: &Path) -> Result<()> {
    render_html(csv_path, html_path).with_context(|| {
        format!(
            "Failed to render {} from {}",
            html_path.display(),
            csv_path.display()
        )
    })?;

    println!("✓ Chart written to: {}", html_path.display());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Report Writer v{}", env!("CARGO_PKG_VERSION"));
    println!("Chart Template: {}", CHART_TEMPLATE);
    println!();
    println!("CSV, HTML and JSON report output for benchmark tools.");
}
