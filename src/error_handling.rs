//! Error types and failure accounting.
//!
//! Fatal configuration problems abort the run before any query is sent.
//! Per-query failures are classified into [`QueryFailure`] variants that are
//! all handled identically (try the next resolver) and kept distinct only
//! for logging and the end-of-run statistics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use log::info;
use log::SetLoggerError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Fatal configuration errors, surfaced before batch resolution begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resolver list was empty.
    #[error("resolver list is empty; at least one DNS server is required")]
    NoResolvers,

    /// A resolver list entry did not parse as an IP address.
    #[error("invalid DNS server address: {0}")]
    InvalidServerAddress(String),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A classified per-query failure.
///
/// The variants are never distinguished for control flow: every one of them
/// means "try the next resolver". They exist so the logs and the failure
/// statistics can say why an attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryFailure {
    /// The server answered but returned no records of the requested type.
    #[error("no answer")]
    NoAnswer,

    /// The domain does not exist (NXDOMAIN).
    #[error("domain does not exist")]
    NotFound,

    /// The query timed out.
    #[error("query timed out")]
    Timeout,

    /// Any other protocol-level failure.
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl QueryFailure {
    /// The statistics key for this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            QueryFailure::NoAnswer => FailureKind::NoAnswer,
            QueryFailure::NotFound => FailureKind::NotFound,
            QueryFailure::Timeout => FailureKind::Timeout,
            QueryFailure::Protocol(_) => FailureKind::Protocol,
        }
    }
}

impl From<ResolveError> for QueryFailure {
    fn from(err: ResolveError) -> Self {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NXDomain {
                    QueryFailure::NotFound
                } else {
                    QueryFailure::NoAnswer
                }
            }
            ResolveErrorKind::Timeout => QueryFailure::Timeout,
            _ => QueryFailure::Protocol(err.to_string()),
        }
    }
}

/// Kinds of query failure tracked by [`FailureStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Empty answer set.
    NoAnswer,
    /// NXDOMAIN.
    NotFound,
    /// Timed-out query.
    Timeout,
    /// Other protocol-level failure.
    Protocol,
}

impl FailureKind {
    /// Human-readable label used in the statistics summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NoAnswer => "No answer",
            FailureKind::NotFound => "Domain not found",
            FailureKind::Timeout => "Query timeout",
            FailureKind::Protocol => "Protocol error",
        }
    }
}

/// Thread-safe failure counters, one per [`FailureKind`].
///
/// Counts individual resolver attempts, not terminal outcomes: one
/// (domain, record type) pair that fails on three resolvers adds three.
pub struct FailureStats {
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl FailureStats {
    /// Creates a tracker with every kind initialized to zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        FailureStats { failures }
    }

    /// Records one failed resolver attempt.
    pub fn increment(&self, kind: FailureKind) {
        // All FailureKind variants are initialized in new(), so unwrap() is safe
        self.failures
            .get(&kind)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current count for one failure kind.
    pub fn get_count(&self, kind: FailureKind) -> usize {
        // All FailureKind variants are initialized in new(), so unwrap() is safe
        self.failures.get(&kind).unwrap().load(Ordering::SeqCst)
    }

    /// Total failed attempts across all kinds.
    pub fn total(&self) -> usize {
        FailureKind::iter().map(|kind| self.get_count(kind)).sum()
    }

    /// Logs a per-kind summary of failed attempts, skipping zero counts.
    pub fn log_summary(&self) {
        if self.total() == 0 {
            info!("No failed resolver attempts");
            return;
        }
        for kind in FailureKind::iter() {
            let count = self.get_count(kind);
            if count > 0 {
                info!("{}: {} failed attempt(s)", kind.as_str(), count);
            }
        }
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
