//! Configuration for import runs.
//!
//! Holds the location of the registries directory and the input file
//! extension the discovery stage matches against.

use crate::constants::{DEFAULT_REGISTRIES_DIR_NAME, INPUT_FILE_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a goods import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Directory scanned for registry spreadsheets
    pub registries_dir: PathBuf,

    /// Input file extension to match (case-sensitive, without the dot)
    pub input_extension: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            registries_dir: default_registries_dir(),
            input_extension: INPUT_FILE_EXTENSION.to_string(),
        }
    }
}

impl ImporterConfig {
    /// Create a configuration for the given registries directory
    pub fn new(registries_dir: impl Into<PathBuf>) -> Self {
        Self {
            registries_dir: registries_dir.into(),
            input_extension: INPUT_FILE_EXTENSION.to_string(),
        }
    }

    /// Override the registries directory
    pub fn with_registries_dir(mut self, registries_dir: impl Into<PathBuf>) -> Self {
        self.registries_dir = registries_dir.into();
        self
    }

    /// Override the input file extension
    pub fn with_input_extension(mut self, extension: impl Into<String>) -> Self {
        self.input_extension = extension.into();
        self
    }
}

/// Resolve the default registries directory under the user data directory
fn default_registries_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("goods-importer").join(DEFAULT_REGISTRIES_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRIES_DIR_NAME))
}
