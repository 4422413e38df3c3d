//! Batch parsing of goods registry spreadsheets
//!
//! Parses every discovered file into goods records, routing per-row
//! failures to logging (decode failures, dropped silently) or to the error
//! collector (category failures, reported later). Successes aggregate
//! across all files in file-then-row order.

use calamine::{Reader, open_workbook_auto};
use tracing::{error, info, warn};

use crate::app::models::{FileDescriptor, GoodsRecord, ParseStats};
use crate::app::ports::CategoryResolver;
use crate::app::services::error_collector::ErrorCollector;
use crate::app::services::row_codec;
use crate::constants::no_category_message;
use crate::{Error, Result};

/// Parser turning registry files into a validated goods batch
#[derive(Debug)]
pub struct GoodsBatchParser<'a, R: CategoryResolver> {
    resolver: &'a R,
}

impl<'a, R: CategoryResolver> GoodsBatchParser<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Parse all files, appending category failures to `collector`.
    ///
    /// A file that cannot be opened contributes zero records and does not
    /// stop its siblings from being processed.
    pub fn parse_all(
        &self,
        files: &[FileDescriptor],
        collector: &mut ErrorCollector,
    ) -> (Vec<GoodsRecord>, ParseStats) {
        let mut goods = Vec::new();
        let mut stats = ParseStats::default();

        for file in files {
            match self.parse_file(file, collector, &mut stats) {
                Ok(mut parsed) => {
                    stats.files_parsed += 1;
                    goods.append(&mut parsed);
                }
                Err(e) => {
                    error!("Could not parse registry file {}: {}", file.name, e);
                    stats.files_failed += 1;
                }
            }
        }

        (goods, stats)
    }

    fn parse_file(
        &self,
        file: &FileDescriptor,
        collector: &mut ErrorCollector,
        stats: &mut ParseStats,
    ) -> Result<Vec<GoodsRecord>> {
        info!("Parsing goods from file {}", file.name);

        let mut workbook = open_workbook_auto(&file.path)
            .map_err(|e| Error::spreadsheet(file.name.clone(), e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::spreadsheet(file.name.clone(), "workbook has no sheets"))?
            .map_err(|e| Error::spreadsheet(file.name.clone(), e.to_string()))?;

        let mut parsed = Vec::new();
        for (index, row) in range.rows().enumerate() {
            match row_codec::decode_row(row) {
                Ok(mut record) => {
                    if self.resolver.find_by_name(&record.category_name).is_some() {
                        stats.rows_valid += 1;
                        parsed.push(record);
                    } else {
                        let description = no_category_message(&record.category_name);
                        warn!("Row {} of {}: {}", index + 1, file.name, description);
                        record.error_description = Some(description);
                        collector.append(record);
                        stats.rows_invalid += 1;
                    }
                }
                Err(e) => {
                    error!(
                        "Could not parse goods from row {} of {}: {}",
                        index + 1,
                        file.name,
                        e
                    );
                    stats.rows_skipped += 1;
                }
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::category_registry::InMemoryCategoryRegistry;
    use rust_xlsxwriter::Workbook;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_registry(
        path: &Path,
        rows: &[(&str, &str, f64, f64, &str, &str)],
    ) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (row, (article, name, count, price, producer, category)) in rows.iter().enumerate() {
            let row = row as u32;
            worksheet.write_string(row, 0, *article).unwrap();
            worksheet.write_string(row, 1, *name).unwrap();
            worksheet.write_number(row, 2, *count).unwrap();
            worksheet.write_number(row, 3, *price).unwrap();
            worksheet.write_string(row, 4, *producer).unwrap();
            worksheet.write_string(row, 5, *category).unwrap();
        }
        workbook.save(path).unwrap();
    }

    fn descriptor(path: PathBuf) -> FileDescriptor {
        FileDescriptor::new(path)
    }

    fn registry() -> InMemoryCategoryRegistry {
        InMemoryCategoryRegistry::from_names(["Electronics", "Hardware"])
    }

    #[test]
    fn test_aggregates_valid_rows_across_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("a.xlsx");
        let second = temp_dir.path().join("b.xlsx");
        write_registry(&first, &[("A-1", "Iron", 2.0, 30.0, "Weller", "Electronics")]);
        write_registry(&second, &[("B-1", "Bolt", 50.0, 0.2, "Acme", "Hardware")]);

        let resolver = registry();
        let parser = GoodsBatchParser::new(&resolver);
        let mut collector = ErrorCollector::new();
        let (goods, stats) = parser.parse_all(
            &[descriptor(first), descriptor(second)],
            &mut collector,
        );

        let articles: Vec<&str> = goods.iter().map(|g| g.article.as_str()).collect();
        assert_eq!(articles, vec!["A-1", "B-1"]);
        assert_eq!(stats.files_parsed, 2);
        assert_eq!(stats.rows_valid, 2);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_unknown_category_goes_to_collector_not_batch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.xlsx");
        write_registry(
            &path,
            &[
                ("A-1", "Iron", 2.0, 30.0, "Weller", "Electronics"),
                ("A-2", "Gizmo", 1.0, 5.0, "Acme", "Bogus"),
            ],
        );

        let resolver = registry();
        let parser = GoodsBatchParser::new(&resolver);
        let mut collector = ErrorCollector::new();
        let (goods, stats) = parser.parse_all(&[descriptor(path)], &mut collector);

        assert_eq!(goods.len(), 1);
        assert_eq!(stats.rows_invalid, 1);
        assert_eq!(collector.len(), 1);

        let invalid = &collector.all()[0];
        assert_eq!(invalid.article, "A-2");
        assert_eq!(
            invalid.error_description.as_deref(),
            Some("No category Bogus found")
        );
    }

    #[test]
    fn test_undecodable_row_is_dropped_everywhere() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.xlsx");

        // Header-style row: the count and price columns are not numbers
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (column, text) in ["article", "name", "count", "price", "producer", "category"]
            .iter()
            .enumerate()
        {
            worksheet.write_string(0, column as u16, *text).unwrap();
        }
        worksheet.write_string(1, 0, "A-1").unwrap();
        worksheet.write_string(1, 1, "Iron").unwrap();
        worksheet.write_number(1, 2, 2.0).unwrap();
        worksheet.write_number(1, 3, 30.0).unwrap();
        worksheet.write_string(1, 4, "Weller").unwrap();
        worksheet.write_string(1, 5, "Electronics").unwrap();
        workbook.save(&path).unwrap();

        let resolver = registry();
        let parser = GoodsBatchParser::new(&resolver);
        let mut collector = ErrorCollector::new();
        let (goods, stats) = parser.parse_all(&[descriptor(path)], &mut collector);

        assert_eq!(goods.len(), 1);
        assert_eq!(stats.rows_skipped, 1);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_corrupt_file_does_not_abort_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let corrupt = temp_dir.path().join("a.xlsx");
        let good = temp_dir.path().join("b.xlsx");
        std::fs::write(&corrupt, b"not a workbook").unwrap();
        write_registry(&good, &[("B-1", "Bolt", 50.0, 0.2, "Acme", "Hardware")]);

        let resolver = registry();
        let parser = GoodsBatchParser::new(&resolver);
        let mut collector = ErrorCollector::new();
        let (goods, stats) = parser.parse_all(
            &[descriptor(corrupt), descriptor(good)],
            &mut collector,
        );

        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.files_parsed, 1);
        assert_eq!(goods.len(), 1);
        assert_eq!(goods[0].article, "B-1");
    }
}
