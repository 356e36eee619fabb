//! Report Writer
//!
//! File output helpers for benchmark reporting tools: CSV tables,
//! HTML chart pages rendered from a CSV file, raw JSON payloads, and
//! checks on the directory reports are written into.
//!
//! This crate provides the core implementation for the
//! `report-writer` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use report_writer::output::{check_output_location, render_html, write_csv};
//!
//! let dir = check_output_location("out")?;
//! write_csv(dir.join("report.csv"), &rows)?;
//! render_html(dir.join("report.csv"), dir.join("report.html"))?;
//! ```

pub mod commands;
pub mod output;
pub mod utils;

pub use utils::error::OutputError;
