//! Error types for the report writers.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing report files or checking where they go
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode CSV for {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Output location ({}) does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Output location ({}) has error: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output location ({}) is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Output location ({}) is not writable", .0.display())]
    NotWritable(PathBuf),

    #[error("Failed to load template {name}: {reason}")]
    Template { name: String, reason: String },

    #[error("Failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

impl OutputError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::Io {
            path: path.into(),
            source,
        }
    }
}
