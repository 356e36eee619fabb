//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the output writers to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{default_report_name, ReportArgs, ReportFiles};
pub use report::{execute_report, validate_args};
pub use utils::{check_location, display_version, render_chart};
