//! HTML chart report renderer.
//!
//! Embeds the raw text of a CSV file into the bundled chart template and
//! writes the rendered page to disk.

use crate::utils::config::{CHART_TEMPLATE, TEMPLATE_DATA_KEY};
use crate::utils::error::OutputError;
use log::{debug, info};
use minijinja::{Environment, UndefinedBehavior};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Templates compiled into the binary, looked up as `templates/<file>`
#[derive(RustEmbed)]
#[folder = "templates/"]
#[prefix = "templates/"]
struct Templates;

/// Render an HTML chart report from a CSV file
///
/// **Public** - main entry point for HTML output
///
/// The CSV is not parsed: its text is bound to the `Data` template variable
/// and escaped by the template engine. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than rejected. The page is rendered in memory
/// before the target is created, so a failed render leaves no file behind.
/// An existing target is truncated.
///
/// # Arguments
/// * `source_csv` - Existing CSV file to embed
/// * `target_html` - Path to output HTML file
///
/// # Errors
/// * `OutputError::Io` - CSV cannot be read or the target cannot be written
/// * `OutputError::Template` - Bundled template is missing or does not parse
/// * `OutputError::Render` - Template execution failed
///
/// # Example
/// ```ignore
/// write_csv("report.csv", &rows)?;
/// render_html("report.csv", "report.html")?;
/// ```
pub fn render_html(
    source_csv: impl AsRef<Path>,
    target_html: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let source_csv = source_csv.as_ref();
    let target_html = target_html.as_ref();

    info!(
        "Rendering HTML from {} to: {}",
        source_csv.display(),
        target_html.display()
    );

    let raw = std::fs::read(source_csv).map_err(|e| OutputError::io(source_csv, e))?;
    debug!("Read {} bytes of CSV data", raw.len());
    let data = String::from_utf8_lossy(&raw);

    let template = load_template(CHART_TEMPLATE)?;
    let page = render_template(CHART_TEMPLATE, &template, &data)?;

    let file = File::create(target_html).map_err(|e| OutputError::io(target_html, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(page.as_bytes())
        .map_err(|e| OutputError::io(target_html, e))?;

    writer.flush().map_err(|e| OutputError::io(target_html, e))?;

    info!("HTML written successfully ({} bytes)", page.len());

    Ok(())
}

/// Look up a bundled template by name
///
/// **Private** - internal asset lookup
fn load_template(name: &str) -> Result<String, OutputError> {
    debug!("Loading template asset: {}", name);

    let asset = Templates::get(name).ok_or_else(|| OutputError::Template {
        name: name.to_string(),
        reason: "asset not found".to_string(),
    })?;

    String::from_utf8(asset.data.into_owned()).map_err(|e| OutputError::Template {
        name: name.to_string(),
        reason: format!("asset is not valid UTF-8: {}", e),
    })
}

/// Parse `source` and render it with `data` bound to the data variable
///
/// **Private** - undefined variables are render errors, not empty strings
fn render_template(name: &str, source: &str, data: &str) -> Result<String, OutputError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    env.add_template(name, source)
        .map_err(|e| OutputError::Template {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    let template = env.get_template(name).map_err(|e| OutputError::Template {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    let context = BTreeMap::from([(TEMPLATE_DATA_KEY, data)]);

    template.render(context).map_err(|e| OutputError::Render {
        name: name.to_string(),
        source: e,
    })
}
