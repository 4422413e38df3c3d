use clap::Parser;
use goods_importer::RunOutcome;
use goods_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(stats) => {
            // In-run failures are absorbed into the outcome; signal them to
            // the scheduler through the exit code only
            match stats.outcome {
                RunOutcome::Completed => process::exit(0),
                _ => process::exit(1),
            }
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}
