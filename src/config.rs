use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// constants (used as defaults)
/// Record types queried when `--types` is not given.
pub const DEFAULT_RECORD_TYPES: &str = "A,AAAA,CNAME";
/// Resolver list file read when `--servers` is not given.
pub const DEFAULT_SERVERS_FILE: &str = "dns_servers.txt";
/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "dns_records.csv";

/// Per-endpoint query timeout in seconds.
///
/// Each resolver endpoint gets the full timeout before the engine moves on
/// to the next one, so a batch with slow resolvers degrades gracefully
/// instead of hanging.
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// What to do when the output file already exists.
///
/// `Ask` prompts interactively; the other values decide without prompting,
/// which is what you want when running from a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnConflict {
    Ask,
    Overwrite,
    Append,
    Cancel,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field
/// attributes. All options except the domain list have defaults.
///
/// # Examples
///
/// ```bash
/// # Basic usage: A, AAAA and CNAME against the servers in dns_servers.txt
/// dns_batch domains.txt
///
/// # Custom record types and resolver list
/// dns_batch domains.txt --types MX,TXT --servers resolvers.txt
///
/// # Non-interactive append to an existing CSV
/// dns_batch domains.txt --on-conflict append
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_batch",
    about = "Queries DNS records for a list of domains and saves them to CSV."
)]
pub struct Config {
    /// File containing the domain list, one domain per line
    #[arg(value_parser)]
    pub domains: PathBuf,

    /// Comma-separated DNS record types to query
    #[arg(short = 't', long, default_value = DEFAULT_RECORD_TYPES)]
    pub types: String,

    /// File containing the DNS server list, one address per line;
    /// file order is the fallback priority order
    #[arg(long, value_parser, default_value = DEFAULT_SERVERS_FILE)]
    pub servers: PathBuf,

    /// Output CSV path
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Behavior when the output file already exists: ask|overwrite|append|cancel
    #[arg(long, value_enum, default_value_t = OnConflict::Ask)]
    pub on_conflict: OnConflict,

    /// Per-endpoint query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Splits `--types` into individual record-type strings.
    ///
    /// Entries are trimmed and empties dropped; no validation against a
    /// known set is done here. Unrecognized types surface later as query
    /// failures for their (domain, type) pairs.
    pub fn record_types(&self) -> Vec<String> {
        self.types
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_types_default() {
        let config = Config::parse_from(["dns_batch", "domains.txt"]);
        assert_eq!(config.record_types(), vec!["A", "AAAA", "CNAME"]);
    }

    #[test]
    fn test_record_types_trims_and_drops_empties() {
        let config =
            Config::parse_from(["dns_batch", "domains.txt", "--types", " MX , TXT ,,NS,"]);
        assert_eq!(config.record_types(), vec!["MX", "TXT", "NS"]);
    }

    #[test]
    fn test_record_types_free_form_passthrough() {
        // Unknown types are not rejected here; they fail per-query instead
        let config = Config::parse_from(["dns_batch", "domains.txt", "--types", "BOGUS"]);
        assert_eq!(config.record_types(), vec!["BOGUS"]);
    }
}
