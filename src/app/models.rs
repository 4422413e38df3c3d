//! Data models for goods import processing
//!
//! This module contains the core data structures for representing parsed
//! goods records, discovered registry files, and per-run statistics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Goods Record
// =============================================================================

/// One parsed inventory line from a registry spreadsheet
///
/// A record is created by the row codec, optionally marked invalid during
/// category validation, and afterwards read-only: valid records go to the
/// persister, invalid ones to the error report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsRecord {
    /// Opaque article identifier as it appears in the sheet
    pub article: String,

    /// Human-readable goods name
    pub name: String,

    /// Quantity, truncated toward zero from the decoded decimal
    pub count: u64,

    /// Unit price, fractional precision retained
    pub price: f64,

    /// Producer name
    pub producer: String,

    /// Raw category label read from the sheet
    pub category_name: String,

    /// Set if and only if the record failed category validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl GoodsRecord {
    /// Create a record that has not been through category validation yet
    pub fn new(
        article: impl Into<String>,
        name: impl Into<String>,
        count: u64,
        price: f64,
        producer: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            article: article.into(),
            name: name.into(),
            count,
            price,
            producer: producer.into(),
            category_name: category_name.into(),
            error_description: None,
        }
    }

    /// Whether the record failed category validation
    pub fn is_invalid(&self) -> bool {
        self.error_description.is_some()
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named classification every goods record must reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, the lookup key used during validation
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// =============================================================================
// File Descriptor
// =============================================================================

/// A discovered registry input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Full path to the file
    pub path: PathBuf,

    /// Base file name, used for archive naming and log output
    pub name: String,
}

impl FileDescriptor {
    /// Create a descriptor, deriving the base name from the path
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self { path, name }
    }
}

// =============================================================================
// Run Statistics
// =============================================================================

/// Terminal state of an import run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All stages ran; per-row and per-file failures may still have occurred
    Completed,

    /// The registries directory could not be listed; nothing else ran
    InputUnreadable,

    /// Batch persistence failed; archiving and reporting were skipped
    PersistFailed,
}

/// Statistics for one import run
///
/// The orchestrator never surfaces errors to its caller; this struct plus
/// the log output are the only programmatic record of what happened.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Registry files found by discovery
    pub files_discovered: usize,

    /// Files parsed without a file-level failure
    pub files_parsed: usize,

    /// Files that could not be opened or read
    pub files_failed: usize,

    /// Valid records handed to the persister
    pub rows_imported: usize,

    /// Rows dropped because they could not be decoded
    pub rows_skipped: usize,

    /// Rows routed to the error collector for an unknown category
    pub rows_invalid: usize,

    /// Files moved to their archive directory
    pub files_archived: usize,

    /// Files that could not be archived
    pub archive_failures: usize,

    /// Path of the error report written this run, if any
    pub report_path: Option<PathBuf>,

    /// Terminal state of the run
    pub outcome: RunOutcome,

    /// Wall-clock duration of the run in milliseconds
    pub processing_time_ms: u128,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            files_discovered: 0,
            files_parsed: 0,
            files_failed: 0,
            rows_imported: 0,
            rows_skipped: 0,
            rows_invalid: 0,
            files_archived: 0,
            archive_failures: 0,
            report_path: None,
            outcome: RunOutcome::Completed,
            processing_time_ms: 0,
        }
    }
}

/// Per-stage counters produced by the batch parser
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Files parsed without a file-level failure
    pub files_parsed: usize,

    /// Files that could not be opened or read
    pub files_failed: usize,

    /// Rows decoded and validated successfully
    pub rows_valid: usize,

    /// Rows dropped because they could not be decoded
    pub rows_skipped: usize,

    /// Rows routed to the error collector
    pub rows_invalid: usize,
}

/// Per-stage counters produced by the archiver
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Files moved into their archive directory
    pub files_archived: usize,

    /// Files whose move failed
    pub files_failed: usize,
}
