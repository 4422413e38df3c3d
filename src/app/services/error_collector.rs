//! Accumulator for rows that failed category validation
//!
//! The collector spans a whole pipeline run (not a single file), so
//! validation failures from different files merge in file-then-row order.
//! It is owned by the importer and passed by reference through the call
//! chain; only the error report writer clears it, and only after the
//! report has been durably written.

use crate::app::models::GoodsRecord;

/// Ordered accumulator of invalid goods records awaiting report generation
#[derive(Debug, Default)]
pub struct ErrorCollector {
    records: Vec<GoodsRecord>,
}

impl ErrorCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the tail; no deduplication
    pub fn append(&mut self, record: GoodsRecord) {
        self.records.push(record);
    }

    /// Current contents in collection order
    pub fn all(&self) -> &[GoodsRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Empty the collector. Called by the report writer after a durable
    /// write, never on a failed run.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_record(article: &str) -> GoodsRecord {
        let mut record = GoodsRecord::new(article, "Widget", 1, 1.0, "Acme", "Bogus");
        record.error_description = Some("No category Bogus found".to_string());
        record
    }

    #[test]
    fn test_append_preserves_order() {
        let mut collector = ErrorCollector::new();
        collector.append(invalid_record("A-1"));
        collector.append(invalid_record("A-2"));
        collector.append(invalid_record("A-1"));

        let articles: Vec<&str> = collector.all().iter().map(|r| r.article.as_str()).collect();
        assert_eq!(articles, vec!["A-1", "A-2", "A-1"]);
    }

    #[test]
    fn test_clear_empties_collector() {
        let mut collector = ErrorCollector::new();
        assert!(collector.is_empty());

        collector.append(invalid_record("A-1"));
        assert_eq!(collector.len(), 1);

        collector.clear();
        assert!(collector.is_empty());
    }
}
