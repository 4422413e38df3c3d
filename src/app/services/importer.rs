//! Import pipeline orchestration
//!
//! Sequences discovery, parsing, persistence, archiving and reporting in a
//! fixed order for one serial, blocking run. The importer never surfaces an
//! error to its caller: every failure is absorbed into a log line and the
//! returned [`RunStats`]. Re-invoking [`GoodsImporter::run`] is the retry
//! mechanism, and unflushed validation errors carry over between runs of
//! the same importer until a run succeeds.

use std::time::Instant;

use tracing::{error, info};

use crate::app::models::{ParseStats, RunOutcome, RunStats};
use crate::app::ports::{CategoryResolver, GoodsPersister};
use crate::app::services::archiver::archive_files;
use crate::app::services::batch_parser::GoodsBatchParser;
use crate::app::services::discovery::list_input_files;
use crate::app::services::error_collector::ErrorCollector;
use crate::app::services::report_writer::ErrorReportWriter;
use crate::config::ImporterConfig;

/// Orchestrator for goods import runs
#[derive(Debug)]
pub struct GoodsImporter<R: CategoryResolver, P: GoodsPersister> {
    config: ImporterConfig,
    resolver: R,
    persister: P,
    collector: ErrorCollector,
}

impl<R: CategoryResolver, P: GoodsPersister> GoodsImporter<R, P> {
    /// Create an importer with its own error collector
    pub fn new(config: ImporterConfig, resolver: R, persister: P) -> Self {
        Self {
            config,
            resolver,
            persister,
            collector: ErrorCollector::new(),
        }
    }

    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    /// Validation errors accumulated and not yet flushed to a report
    pub fn pending_errors(&self) -> usize {
        self.collector.len()
    }

    /// Execute one import run.
    ///
    /// Stage order: discovery, batch parsing, persistence, and only after
    /// a successful persist: archiving and error reporting. An aborted
    /// run leaves input files and accumulated errors untouched.
    pub fn run(&mut self) -> RunStats {
        let start_time = Instant::now();
        info!(
            "Starting goods import run in {}",
            self.config.registries_dir.display()
        );

        let files = match list_input_files(&self.config.registries_dir, &self.config.input_extension)
        {
            Ok(files) => files,
            Err(e) => {
                error!("Could not read registries directory: {}", e);
                return RunStats {
                    outcome: RunOutcome::InputUnreadable,
                    processing_time_ms: start_time.elapsed().as_millis(),
                    ..Default::default()
                };
            }
        };
        info!("Discovered {} registry files", files.len());

        let parser = GoodsBatchParser::new(&self.resolver);
        let (goods, parse_stats) = parser.parse_all(&files, &mut self.collector);

        // The whole aggregated batch goes to the persister in one call,
        // even when empty; carried-over errors may still flush below.
        if let Err(e) = self.persister.add_list_of_goods(&goods) {
            error!("Saving goods failed, run aborted: {}", e);
            return Self::stats_from_parse(
                files.len(),
                parse_stats,
                RunOutcome::PersistFailed,
                start_time,
            );
        }

        let archive_stats = archive_files(&files);

        let report_writer = ErrorReportWriter::new(self.config.registries_dir.clone());
        let report_path = match report_writer.write_report(&mut self.collector) {
            Ok(path) => path,
            Err(e) => {
                error!("Could not save error report: {}", e);
                None
            }
        };

        info!(
            "Import run complete: {} goods persisted, {} files archived",
            goods.len(),
            archive_stats.files_archived
        );

        let mut stats = Self::stats_from_parse(
            files.len(),
            parse_stats,
            RunOutcome::Completed,
            start_time,
        );
        stats.rows_imported = goods.len();
        stats.files_archived = archive_stats.files_archived;
        stats.archive_failures = archive_stats.files_failed;
        stats.report_path = report_path;
        stats
    }

    fn stats_from_parse(
        files_discovered: usize,
        parse_stats: ParseStats,
        outcome: RunOutcome,
        start_time: Instant,
    ) -> RunStats {
        RunStats {
            files_discovered,
            files_parsed: parse_stats.files_parsed,
            files_failed: parse_stats.files_failed,
            rows_skipped: parse_stats.rows_skipped,
            rows_invalid: parse_stats.rows_invalid,
            outcome,
            processing_time_ms: start_time.elapsed().as_millis(),
            ..Default::default()
        }
    }
}
