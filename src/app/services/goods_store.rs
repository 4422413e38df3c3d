//! Append-only JSON-lines goods store
//!
//! The [`GoodsPersister`] implementation wired into the CLI binary. Each
//! record becomes one JSON line; the whole batch is serialized first and
//! appended in a single write so a failure never leaves half a batch in
//! the file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::app::models::GoodsRecord;
use crate::app::ports::GoodsPersister;
use crate::{Error, Result};

/// Goods persister appending JSON lines to a local file
#[derive(Debug)]
pub struct JsonlGoodsStore {
    path: PathBuf,
}

impl JsonlGoodsStore {
    /// Create a store writing to `path`; the file and its parent directory
    /// are created on first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl GoodsPersister for JsonlGoodsStore {
    fn add_list_of_goods(&self, goods: &[GoodsRecord]) -> Result<()> {
        let mut buffer = String::new();
        for record in goods {
            let line = serde_json::to_string(record)
                .map_err(|e| Error::persistence(format!("could not serialize record: {}", e)))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::persistence(format!(
                    "could not create goods store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                Error::persistence(format!(
                    "could not open goods store {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        file.write_all(buffer.as_bytes()).map_err(|e| {
            Error::persistence(format!(
                "could not append to goods store {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Appended {} goods to {}", goods.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_appends_one_json_line_per_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("db").join("goods.jsonl");
        let store = JsonlGoodsStore::new(&path);

        let batch = vec![
            GoodsRecord::new("A-1", "Bolt", 10, 0.25, "Acme", "Hardware"),
            GoodsRecord::new("A-2", "Nut", 20, 0.15, "Acme", "Hardware"),
        ];
        store.add_list_of_goods(&batch).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let restored: Vec<GoodsRecord> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(restored, batch);
    }

    #[test]
    fn test_consecutive_batches_accumulate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goods.jsonl");
        let store = JsonlGoodsStore::new(&path);

        store
            .add_list_of_goods(&[GoodsRecord::new("A-1", "Bolt", 10, 0.25, "Acme", "Hardware")])
            .unwrap();
        store
            .add_list_of_goods(&[GoodsRecord::new("A-2", "Nut", 20, 0.15, "Acme", "Hardware")])
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_empty_batch_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goods.jsonl");
        let store = JsonlGoodsStore::new(&path);

        store.add_list_of_goods(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
