//! CSV report writer.
//!
//! Writes a matrix of string cells to disk. Quoting and escaping are done
//! by the `csv` crate; rows are allowed to have different lengths.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write rows to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// The file is created or truncated. Fields containing a comma, quote,
/// CR or LF are quoted and embedded quotes are doubled. Records end in `\n`.
///
/// # Arguments
/// * `output_path` - Path to output CSV file
/// * `rows` - Rows of cells, written in order
///
/// # Errors
/// * `OutputError::Io` - File cannot be created, written or flushed
/// * `OutputError::Csv` - The encoder rejected a record
///
/// # Example
/// ```ignore
/// let rows = vec![vec!["name".to_string(), "latency".to_string()]];
/// write_csv("report.csv", &rows)?;
/// ```
pub fn write_csv(output_path: impl AsRef<Path>, rows: &[Vec<String>]) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing CSV to: {}", output_path.display());

    let file = File::create(output_path).map_err(|e| OutputError::io(output_path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| csv_error(output_path, e))?;
    }

    // into_inner flushes the encoder and the BufWriter underneath it
    writer
        .into_inner()
        .map_err(|e| OutputError::io(output_path, e.into_error()))?;

    debug!("Wrote {} rows", rows.len());
    info!("CSV written successfully ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Map an encoder error, keeping plain I/O failures as `Io`
///
/// **Private** - internal helper
fn csv_error(path: &Path, err: csv::Error) -> OutputError {
    if err.is_io_error() {
        OutputError::io(path, err.into())
    } else {
        OutputError::Csv {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_write_plain_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plain.csv");

        write_csv(&path, &rows(&[&["a", "b"], &["1", "2"]])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
    }

    #[test]
    fn test_write_quotes_special_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("quoted.csv");

        write_csv(&path, &rows(&[&["x,y", "say \"hi\"", "two\nlines"]])).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "\"x,y\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn test_write_ragged_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("ragged.csv");

        write_csv(&path, &rows(&[&["a", "b", "c"], &["1"]])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b,c\n1\n");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("existing.csv");
        std::fs::write(&path, "stale,stale,stale\nstale\n").unwrap();

        write_csv(&path, &rows(&[&["new"]])).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing/report.csv");

        let result = write_csv(&path, &rows(&[&["a"]]));

        assert!(matches!(result, Err(OutputError::Io { .. })));
        assert!(!path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_io_error() {
        // larger than both the encoder buffer and the BufWriter
        let big = vec![vec!["x".repeat(100); 10]; 200];

        let result = write_csv("/dev/full", &big);

        assert!(matches!(result, Err(OutputError::Io { .. })));
    }
}
