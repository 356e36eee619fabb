//! Output writers for report data.
//!
//! This module handles writing report files to disk:
//! - CSV tables
//! - HTML chart pages rendered from a CSV file
//! - Raw JSON payloads
//!
//! and checking the directory they are written into.

pub mod csv;
pub mod html;
pub mod json;
pub mod location;

// Re-export main functions
pub use self::csv::write_csv;
pub use self::html::render_html;
pub use self::json::write_json;
pub use self::location::check_output_location;
