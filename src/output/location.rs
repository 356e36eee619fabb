//! Output location checks.
//!
//! Reports go into a caller-chosen directory. Before anything is written
//! the directory must exist, be a directory, and carry the owner-write bit.

use crate::utils::error::OutputError;
use log::debug;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Check that a path is an existing, writable directory
///
/// **Public** - called before any report file is written
///
/// Writability is the owner-write permission bit (`0o200`), not an access
/// probe: a directory with the bit set can still reject writes from a user
/// who is not its owner.
///
/// # Arguments
/// * `output_location` - Directory that will receive report files
///
/// # Returns
/// The path, unchanged
///
/// # Errors
/// * `OutputError::NotFound` - Nothing exists at the path
/// * `OutputError::Stat` - The path could not be inspected
/// * `OutputError::NotADirectory` - The path is not a directory
/// * `OutputError::NotWritable` - The owner-write bit is clear
pub fn check_output_location(output_location: impl AsRef<Path>) -> Result<PathBuf, OutputError> {
    let output_location = output_location.as_ref();

    debug!("Checking output location: {}", output_location.display());

    let metadata = std::fs::metadata(output_location).map_err(|e| match e.kind() {
        ErrorKind::NotFound => OutputError::NotFound(output_location.to_path_buf()),
        _ => OutputError::Stat {
            path: output_location.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(OutputError::NotADirectory(output_location.to_path_buf()));
    }

    if !is_owner_writable(&metadata) {
        return Err(OutputError::NotWritable(output_location.to_path_buf()));
    }

    Ok(output_location.to_path_buf())
}

#[cfg(unix)]
fn is_owner_writable(metadata: &Metadata) -> bool {
    use crate::utils::config::OWNER_WRITE_BIT;
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & OWNER_WRITE_BIT != 0
}

#[cfg(not(unix))]
fn is_owner_writable(metadata: &Metadata) -> bool {
    !metadata.permissions().readonly()
}
