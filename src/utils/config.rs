//! Configuration and constants for the report writers.

/// Name of the bundled chart template, as looked up in the embedded assets
pub const CHART_TEMPLATE: &str = "templates/single_chart.html";

/// Template variable that receives the raw CSV text
pub const TEMPLATE_DATA_KEY: &str = "Data";

// Report file extensions
pub const CSV_EXTENSION: &str = "csv";
pub const HTML_EXTENSION: &str = "html";
pub const JSON_EXTENSION: &str = "json";

/// Prefix for report names when none is given
pub const DEFAULT_REPORT_PREFIX: &str = "report";

/// chrono format used to stamp default report names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Owner-write permission bit checked on output directories
pub const OWNER_WRITE_BIT: u32 = 1 << 7;
