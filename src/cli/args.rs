//! Command-line argument definitions for the goods importer
//!
//! This module defines the CLI interface using the clap derive API. The
//! binary is intended to be triggered by an external scheduler: one
//! invocation is one import run.

use crate::constants::INPUT_FILE_EXTENSION;
use crate::{Error, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the goods importer
///
/// Scans a registries directory for spreadsheet files, imports the goods
/// they describe, archives the processed files and writes an error report
/// for rows whose category is unknown.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "goods-importer",
    version,
    about = "Import goods registries from spreadsheet files into the inventory",
    long_about = "Scans a directory for goods registry spreadsheets, decodes each row into a \
                  goods record, validates it against the known categories, persists the \
                  aggregated batch, archives the processed files and writes a spreadsheet \
                  report for rows whose category could not be resolved. Intended to be run \
                  by an external scheduler; a failed run leaves the input directory untouched \
                  so the next invocation retries it."
)]
pub struct Args {
    /// Directory containing goods registry spreadsheets
    ///
    /// Defaults to the goodsregistries directory under the user data
    /// directory.
    #[arg(
        short = 'r',
        long = "registries",
        value_name = "PATH",
        help = "Directory containing goods registry spreadsheets"
    )]
    pub registries_dir: Option<PathBuf>,

    /// File listing the known category names, one per line
    #[arg(
        short = 'c',
        long = "categories",
        value_name = "PATH",
        help = "File listing the known category names, one per line"
    )]
    pub categories_file: PathBuf,

    /// JSON-lines file imported goods are appended to
    ///
    /// Defaults to goods.jsonl next to the registries directory.
    #[arg(
        long = "goods-db",
        value_name = "PATH",
        help = "JSON-lines file imported goods are appended to"
    )]
    pub goods_db: Option<PathBuf>,

    /// Input spreadsheet extension to match (case-sensitive)
    #[arg(
        long = "extension",
        value_name = "EXT",
        default_value = INPUT_FILE_EXTENSION,
        help = "Input spreadsheet extension to match (case-sensitive)"
    )]
    pub extension: String,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log warnings and errors"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate arguments before the run starts
    pub fn validate(&self) -> Result<()> {
        if !self.categories_file.is_file() {
            return Err(Error::configuration(format!(
                "category file does not exist: {}",
                self.categories_file.display()
            )));
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::configuration(format!(
                "extension must be given without the dot, got '{}'",
                self.extension
            )));
        }

        Ok(())
    }

    /// Resolve the goods store path, defaulting to a sibling of the
    /// registries directory
    pub fn goods_db_path(&self, registries_dir: &Path) -> PathBuf {
        self.goods_db.clone().unwrap_or_else(|| {
            registries_dir
                .parent()
                .map(|parent| parent.join("goods.jsonl"))
                .unwrap_or_else(|| PathBuf::from("goods.jsonl"))
        })
    }
}
