//! dns_batch library: batch DNS resolution with resolver fallback
//!
//! Given a list of domains and a list of record types, every (domain, record
//! type) pair is queried against an ordered list of DNS servers, falling
//! back through the servers until one answers. Successful answers accumulate
//! into records that are persisted to CSV.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use dns_batch::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["dns_batch", "domains.txt", "--types", "A,MX"]);
//!
//! let report = run_batch(config).await?;
//! println!(
//!     "Resolved {} of {} pairs",
//!     report.resolved,
//!     report.attempted_pairs
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from an async context.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod input;
mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OnConflict};
pub use dns::{resolve_batch, resolve_one, QueryTransport, ResolverEndpoint, ResolverPool};
pub use error_handling::{ConfigError, FailureKind, FailureStats, QueryFailure};
pub use models::{ProgressEvent, ResultRecord};
pub use run::{run_batch, BatchReport};

// Internal run module (contains the batch orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::error_handling::FailureStats;
    use crate::{dns, export, input};

    /// Results of a completed batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Number of domains in the input list.
        pub total_domains: usize,
        /// Number of (domain, record type) pairs attempted.
        pub attempted_pairs: usize,
        /// Number of pairs that produced a record.
        pub resolved: usize,
        /// Number of pairs that exhausted every resolver.
        pub failed_pairs: usize,
        /// Records written to the output file; `None` if the operator
        /// cancelled the write.
        pub records_written: Option<usize>,
        /// Path of the output CSV.
        pub output_path: PathBuf,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a batch resolution with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads the domain
    /// and resolver lists, resolves every (domain, record type) pair with
    /// ordered fallback, and persists the accumulated records to CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if an input file cannot be read, the resolver list
    /// is empty or contains an unparsable address, or the output file
    /// cannot be written. Individual query failures never propagate here;
    /// the batch always runs to completion.
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        let domains = input::read_lines(&config.domains)
            .await
            .context("Failed to read domain list")?;
        info!("Total domains in file: {}", domains.len());

        let record_types = config.record_types();
        info!("Record types: {}", record_types.join(", "));

        let servers = input::read_lines(&config.servers)
            .await
            .context("Failed to read DNS server list")?;
        let pool = dns::ResolverPool::new(&servers, Duration::from_secs(config.timeout_seconds))?;
        info!(
            "Using {} resolver(s) in fallback order: {}",
            pool.len(),
            servers.join(", ")
        );

        let start_time = Instant::now();
        let stats = FailureStats::new();

        let records = dns::resolve_batch(
            &domains,
            &record_types,
            pool.endpoints(),
            &stats,
            |event| {
                info!("Progress: {}/{}", event.completed, event.total);
            },
        )
        .await;

        let attempted_pairs = domains.len() * record_types.len();
        let failed_pairs = attempted_pairs - records.len();
        stats.log_summary();

        let records_written = match export::resolve_conflict(&config.output, config.on_conflict)? {
            Some(disposition) => {
                let written = export::write_records(&config.output, &records, disposition)
                    .context("Failed to write CSV output")?;
                info!("{} record(s) written to {}", written, config.output.display());
                Some(written)
            }
            None => {
                info!("Output write cancelled");
                None
            }
        };

        Ok(BatchReport {
            total_domains: domains.len(),
            attempted_pairs,
            resolved: records.len(),
            failed_pairs,
            records_written,
            output_path: config.output,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
