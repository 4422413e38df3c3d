//! Goods Importer Library
//!
//! A Rust library for importing goods registries from spreadsheet files
//! into an inventory system.
//!
//! This library provides tools for:
//! - Discovering registry spreadsheets in a configured directory
//! - Decoding spreadsheet rows into goods records
//! - Validating records against a category registry
//! - Collecting category-validation failures for a rewritten error report
//! - Persisting the aggregated batch through a pluggable persister
//! - Archiving processed registry files with timestamped names

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod ports;
    pub mod services {
        pub mod archiver;
        pub mod batch_parser;
        pub mod category_registry;
        pub mod discovery;
        pub mod error_collector;
        pub mod goods_store;
        pub mod importer;
        pub mod report_writer;
        pub mod row_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Category, FileDescriptor, GoodsRecord, RunOutcome, RunStats};
pub use app::ports::{CategoryResolver, GoodsPersister};
pub use app::services::importer::GoodsImporter;
pub use config::ImporterConfig;

/// Result type alias for the goods importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for goods import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A registry spreadsheet could not be opened or read
    #[error("Spreadsheet error in file '{file}': {message}")]
    Spreadsheet { file: String, message: String },

    /// A single row could not be decoded into a goods record
    #[error("Row decode error in column {column}: {message}")]
    RowDecode { column: usize, message: String },

    /// Category registry error
    #[error("Category registry error: {message}")]
    CategoryRegistry { message: String },

    /// Batch persistence failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// A processed file could not be moved to the archive
    #[error("Archive error for '{path}': {message}")]
    Archive { path: String, message: String },

    /// The error report could not be written
    #[error("Report write error for '{path}': {message}")]
    ReportWrite { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a spreadsheet error with file context
    pub fn spreadsheet(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Spreadsheet {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a row decode error for a column
    pub fn row_decode(column: usize, message: impl Into<String>) -> Self {
        Self::RowDecode {
            column,
            message: message.into(),
        }
    }

    /// Create a category registry error
    pub fn category_registry(message: impl Into<String>) -> Self {
        Self::CategoryRegistry {
            message: message.into(),
        }
    }

    /// Create a persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create an archive error with path context
    pub fn archive(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Archive {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a report write error with path context
    pub fn report_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReportWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(error: calamine::Error) -> Self {
        Self::Spreadsheet {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::ReportWrite {
            path: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}
