//! Error report generation for rows that failed category validation
//!
//! Renders the error collector's contents as a new spreadsheet with an
//! appended failure-reason column and writes it under the `errors/`
//! subdirectory of the registries directory. The collector is cleared only
//! after the report has been durably written; a write failure leaves it
//! populated for the next successful run.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::app::services::error_collector::ErrorCollector;
use crate::app::services::row_codec;
use crate::constants::{ERROR_REPORT_SHEET_NAME, ERRORS_DIR_NAME, error_report_file_name};
use crate::{Error, Result};

/// Writer producing the per-run error report workbook
#[derive(Debug)]
pub struct ErrorReportWriter {
    registries_dir: PathBuf,
}

impl ErrorReportWriter {
    pub fn new(registries_dir: impl Into<PathBuf>) -> Self {
        Self {
            registries_dir: registries_dir.into(),
        }
    }

    /// Write the collected records as a report and clear the collector.
    ///
    /// Returns `Ok(None)` without touching the filesystem when the
    /// collector is empty. Every cell of the report is written as text,
    /// including the mirrored numeric fields.
    pub fn write_report(&self, collector: &mut ErrorCollector) -> Result<Option<PathBuf>> {
        if collector.is_empty() {
            return Ok(None);
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(ERROR_REPORT_SHEET_NAME)?;

        for (row, record) in collector.all().iter().enumerate() {
            let mut cells = row_codec::encode_row(record);
            cells.push(record.error_description.clone().unwrap_or_default());
            for (column, text) in cells.iter().enumerate() {
                worksheet.write_string(row as u32, column as u16, text.as_str())?;
            }
        }

        let errors_dir = self.registries_dir.join(ERRORS_DIR_NAME);
        fs::create_dir_all(&errors_dir).map_err(|e| {
            Error::report_write(errors_dir.display().to_string(), e.to_string())
        })?;

        let path = errors_dir.join(error_report_file_name(Local::now()));
        workbook
            .save(&path)
            .map_err(|e| Error::report_write(path.display().to_string(), e.to_string()))?;

        info!(
            "Wrote error report with {} rows to {}",
            collector.len(),
            path.display()
        );
        collector.clear();
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::GoodsRecord;
    use calamine::{Data, Reader, open_workbook_auto};
    use tempfile::TempDir;

    fn invalid_record(article: &str, category: &str) -> GoodsRecord {
        let mut record = GoodsRecord::new(article, "Gizmo", 3, 4.5, "Acme", category);
        record.error_description = Some(format!("No category {} found", category));
        record
    }

    #[test]
    fn test_empty_collector_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ErrorReportWriter::new(temp_dir.path());
        let mut collector = ErrorCollector::new();

        let path = writer.write_report(&mut collector).unwrap();
        assert!(path.is_none());
        assert!(!temp_dir.path().join(ERRORS_DIR_NAME).exists());
    }

    #[test]
    fn test_report_rows_mirror_collector_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ErrorReportWriter::new(temp_dir.path());

        let mut collector = ErrorCollector::new();
        collector.append(invalid_record("A-1", "Bogus"));
        collector.append(invalid_record("A-2", "Phantom"));

        let path = writer.write_report(&mut collector).unwrap().unwrap();
        assert!(collector.is_empty());
        assert!(path.starts_with(temp_dir.path().join(ERRORS_DIR_NAME)));

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range(ERROR_REPORT_SHEET_NAME).unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec!["A-1", "Gizmo", "3", "4.5", "Acme", "Bogus", "No category Bogus found"]
        );
        assert_eq!(rows[1][0], "A-2");
        assert_eq!(rows[1][6], "No category Phantom found");
    }

    #[test]
    fn test_write_failure_leaves_collector_populated() {
        let temp_dir = TempDir::new().unwrap();
        // Occupy the errors path with a file so the directory cannot be created
        fs::write(temp_dir.path().join(ERRORS_DIR_NAME), "in the way").unwrap();

        let writer = ErrorReportWriter::new(temp_dir.path());
        let mut collector = ErrorCollector::new();
        collector.append(invalid_record("A-1", "Bogus"));

        assert!(writer.write_report(&mut collector).is_err());
        assert_eq!(collector.len(), 1);
    }
}
