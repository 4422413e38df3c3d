//! Command implementation for the goods importer CLI
//!
//! Wires the configuration, the category registry and the goods store into
//! a [`GoodsImporter`], executes one run and prints a human-readable
//! summary. In-run failures never reach the exit path as errors; they are
//! reflected in the logs and the run outcome.

use colored::*;
use tracing::{Level, debug, info};

use crate::app::services::category_registry::InMemoryCategoryRegistry;
use crate::app::services::goods_store::JsonlGoodsStore;
use crate::app::services::importer::GoodsImporter;
use crate::cli::args::Args;
use crate::config::ImporterConfig;
use crate::{Result, RunOutcome, RunStats};

/// Run one import according to the parsed arguments
pub fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args);

    info!("Starting goods importer");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = ImporterConfig::default().with_input_extension(args.extension.clone());
    if let Some(registries_dir) = &args.registries_dir {
        config = config.with_registries_dir(registries_dir.clone());
    }

    let registry = InMemoryCategoryRegistry::load_from_file(&args.categories_file)?;
    info!(
        "Loaded {} categories from {}",
        registry.len(),
        args.categories_file.display()
    );

    let store = JsonlGoodsStore::new(args.goods_db_path(&config.registries_dir));
    debug!("Goods store: {}", store.path().display());

    let mut importer = GoodsImporter::new(config, registry, store);
    let stats = importer.run();

    print_summary(&stats, importer.pending_errors());
    Ok(stats)
}

/// Initialize the tracing subscriber with a verbosity-dependent level
fn setup_logging(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Print the run summary to stdout
fn print_summary(stats: &RunStats, pending_errors: usize) {
    match stats.outcome {
        RunOutcome::Completed => {
            println!("{}", "Goods import complete".bright_green().bold());
        }
        RunOutcome::InputUnreadable => {
            println!(
                "{}",
                "Goods import aborted: registries directory unreadable"
                    .bright_red()
                    .bold()
            );
        }
        RunOutcome::PersistFailed => {
            println!(
                "{}",
                "Goods import aborted: batch persistence failed"
                    .bright_red()
                    .bold()
            );
        }
    }

    println!(
        "  {} {} discovered, {} parsed, {} failed",
        "Files:".bright_cyan(),
        stats.files_discovered,
        stats.files_parsed,
        stats.files_failed
    );
    println!(
        "  {} {} imported, {} skipped, {} invalid",
        "Rows:".bright_cyan(),
        stats.rows_imported,
        stats.rows_skipped,
        stats.rows_invalid
    );
    println!(
        "  {} {} archived, {} failed",
        "Archive:".bright_cyan(),
        stats.files_archived,
        stats.archive_failures
    );

    if let Some(report_path) = &stats.report_path {
        println!(
            "  {} {}",
            "Error report:".bright_cyan(),
            report_path.display()
        );
    }
    if pending_errors > 0 {
        println!(
            "  {} {} error rows awaiting a successful run",
            "Pending:".bright_yellow(),
            pending_errors
        );
    }
    println!(
        "  {} {} ms",
        "Processing time:".bright_cyan(),
        stats.processing_time_ms
    );
}
