//! Input file discovery for goods registries
//!
//! Lists candidate registry files in the configured directory, filtered by
//! extension. An empty or non-matching directory is not a failure; an
//! unreadable directory is, and aborts the whole run upstream.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::app::models::FileDescriptor;
use crate::{Error, Result};

/// List registry files in `directory` whose extension matches `extension`
/// (case-sensitive, without the dot), sorted by file name so parsing and
/// reporting happen in a deterministic file order.
pub fn list_input_files(directory: &Path, extension: &str) -> Result<Vec<FileDescriptor>> {
    let entries = fs::read_dir(directory).map_err(|e| {
        Error::io(
            format!("could not list registries directory {}", directory.display()),
            e,
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io(
                format!("could not read directory entry in {}", directory.display()),
                e,
            )
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if has_extension(&path, extension) {
            files.push(FileDescriptor::new(path));
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Found {} .{} files in {}",
        files.len(),
        extension,
        directory.display()
    );
    Ok(files)
}

/// Check a path's extension with a case-sensitive comparison
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.xls"), "data").unwrap();
        fs::write(temp_dir.path().join("a.xls"), "data").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "data").unwrap();
        fs::create_dir(temp_dir.path().join("nested.xls")).unwrap();

        let files = list_input_files(temp_dir.path(), "xls").unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.xls", "b.xls"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("upper.XLS"), "data").unwrap();

        let files = list_input_files(temp_dir.path(), "xls").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_empty_directory_is_not_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let files = list_input_files(temp_dir.path(), "xls").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_unreadable_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent");

        let result = list_input_files(&missing, "xls");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
