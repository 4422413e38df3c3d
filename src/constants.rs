//! Application constants for the goods importer
//!
//! This module contains directory names, file naming conventions,
//! the registry column layout, and shared naming helpers used
//! throughout the import pipeline.

use chrono::{DateTime, Local};

// =============================================================================
// Directory and File Naming
// =============================================================================

/// Default directory name holding goods registry spreadsheets
pub const DEFAULT_REGISTRIES_DIR_NAME: &str = "goodsregistries";

/// Default input file extension (case-sensitive match)
pub const INPUT_FILE_EXTENSION: &str = "xls";

/// Archive subdirectory created next to each processed registry file
pub const ARCHIVE_DIR_NAME: &str = "archive";

/// Error report subdirectory created under the registries directory
pub const ERRORS_DIR_NAME: &str = "errors";

/// Infix inserted between the timestamp and the original name of an archived file
pub const ARCHIVE_FILE_INFIX: &str = "_archive_";

/// Suffix of generated error report file names (before the extension)
pub const ERROR_REPORT_SUFFIX: &str = "_errors";

/// Extension of generated error reports
pub const ERROR_REPORT_EXTENSION: &str = "xlsx";

/// Worksheet title of the generated error report
pub const ERROR_REPORT_SHEET_NAME: &str = "Goods error rows";

/// Timestamp format used for archived files and error reports: dd-MM-yyyy(HH:mm)
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y(%H:%M)";

// =============================================================================
// Registry Column Layout
// =============================================================================

/// Fixed column positions in registry spreadsheets and error reports
pub mod columns {
    pub const ARTICLE: usize = 0;
    pub const NAME: usize = 1;
    pub const COUNT: usize = 2;
    pub const PRICE: usize = 3;
    pub const PRODUCER: usize = 4;
    pub const CATEGORY_NAME: usize = 5;

    /// Only present in error reports
    pub const ERROR_DESCRIPTION: usize = 6;
}

/// Number of columns in an input registry row
pub const GOODS_COLUMN_COUNT: usize = 6;

// =============================================================================
// Helper Functions
// =============================================================================

/// Format a moment in time the way archive and report names expect it
pub fn format_timestamp(moment: DateTime<Local>) -> String {
    moment.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the archived name for a registry file
pub fn archive_file_name(original_name: &str, moment: DateTime<Local>) -> String {
    format!(
        "{}{}{}",
        format_timestamp(moment),
        ARCHIVE_FILE_INFIX,
        original_name
    )
}

/// Build the file name for a generated error report
pub fn error_report_file_name(moment: DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        format_timestamp(moment),
        ERROR_REPORT_SUFFIX,
        ERROR_REPORT_EXTENSION
    )
}

/// Build the description attached to a record whose category is unknown
pub fn no_category_message(category_name: &str) -> String {
    format!("No category {} found", category_name)
}
