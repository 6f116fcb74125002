//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_batch` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_batch::initialization::init_logger_with;
use dns_batch::{run_batch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_batch(config).await {
        Ok(report) => {
            println!(
                "Resolved {} of {} domain/record-type pair{} across {} domain{} in {:.1}s",
                report.resolved,
                report.attempted_pairs,
                if report.attempted_pairs == 1 { "" } else { "s" },
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            match report.records_written {
                Some(written) => {
                    println!("{} record(s) saved to {}", written, report.output_path.display())
                }
                None => println!("No output written (cancelled)"),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_batch error: {:#}", e);
            process::exit(1);
        }
    }
}
