//! Archiving of processed registry files
//!
//! After a successful batch persist, every source file is moved (not
//! copied) into an `archive/` subdirectory next to it, under a
//! timestamped name. A single failed move is logged and does not stop the
//! remaining files from being archived.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, warn};

use crate::app::models::{ArchiveStats, FileDescriptor};
use crate::constants::{ARCHIVE_DIR_NAME, archive_file_name};
use crate::{Error, Result};

/// Move all files into their archive directories, logging per-file failures
pub fn archive_files(files: &[FileDescriptor]) -> ArchiveStats {
    let mut stats = ArchiveStats::default();

    for file in files {
        match archive_file(file) {
            Ok(destination) => {
                debug!("Archived {} to {}", file.name, destination.display());
                stats.files_archived += 1;
            }
            Err(e) => {
                warn!("Moving file {} to archive failed: {}", file.name, e);
                stats.files_failed += 1;
            }
        }
    }

    stats
}

/// Move one file into the `archive/` subdirectory of its parent.
///
/// The timestamp is formatted at move time, so files archived across a
/// minute boundary may carry different timestamps within one run.
fn archive_file(file: &FileDescriptor) -> Result<PathBuf> {
    let parent = file.path.parent().ok_or_else(|| {
        Error::archive(
            file.path.display().to_string(),
            "file has no parent directory",
        )
    })?;

    let archive_dir = parent.join(ARCHIVE_DIR_NAME);
    fs::create_dir_all(&archive_dir)
        .map_err(|e| Error::archive(archive_dir.display().to_string(), e.to_string()))?;

    let destination = archive_dir.join(archive_file_name(&file.name, Local::now()));
    // Same filesystem as the source, so a rename is a true move
    fs::rename(&file.path, &destination)
        .map_err(|e| Error::archive(file.path.display().to_string(), e.to_string()))?;

    Ok(destination)
}
