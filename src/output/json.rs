//! JSON report output writer.
//!
//! Writes already-encoded JSON bytes to disk. The bytes are not validated.

use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a JSON byte buffer to a file verbatim
///
/// **Public** - main entry point for JSON output
///
/// The target is created or truncated, so after a successful call it holds
/// exactly `json_data`.
///
/// # Arguments
/// * `json_data` - JSON-encoded bytes (not checked)
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::Io` - File cannot be opened, written or flushed
///
/// # Example
/// ```ignore
/// let bytes = serde_json::to_vec_pretty(&rows)?;
/// write_json(&bytes, "report.json")?;
/// ```
pub fn write_json(json_data: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    let file = File::create(output_path).map_err(|e| OutputError::io(output_path, e))?;

    let mut writer = BufWriter::new(file);

    writer
        .write_all(json_data)
        .map_err(|e| OutputError::io(output_path, e))?;

    writer.flush().map_err(|e| OutputError::io(output_path, e))?;

    info!("JSON written successfully ({} bytes)", json_data.len());

    Ok(())
}
