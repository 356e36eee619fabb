use crate::utils::config::{
    CSV_EXTENSION, DEFAULT_REPORT_PREFIX, HTML_EXTENSION, JSON_EXTENSION,
    REPORT_TIMESTAMP_FORMAT,
};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// JSON file holding the rows (array of arrays of strings)
    pub rows_path: PathBuf,

    /// Directory that receives the report files
    pub output_dir: PathBuf,

    /// File stem shared by the report files
    pub name: String,

    /// Also render an HTML chart from the CSV
    pub html: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            rows_path: PathBuf::from("rows.json"),
            output_dir: PathBuf::from("."),
            name: default_report_name(),
            html: false,
        }
    }
}

/// Report name stamped with the current local time, e.g. `report_20240101120000`
pub fn default_report_name() -> String {
    format!(
        "{}_{}",
        DEFAULT_REPORT_PREFIX,
        Local::now().format(REPORT_TIMESTAMP_FORMAT)
    )
}

/// Paths of the files a report run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub html: Option<PathBuf>,
}

impl ReportFiles {
    pub fn new(output_dir: &Path, name: &str, html: bool) -> Self {
        let file = |ext: &str| output_dir.join(format!("{}.{}", name, ext));

        Self {
            csv: file(CSV_EXTENSION),
            json: file(JSON_EXTENSION),
            html: html.then(|| file(HTML_EXTENSION)),
        }
    }
}
