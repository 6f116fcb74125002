//! Core record and progress types shared across the crate.

use serde::Serialize;

/// One successfully resolved (domain, record type) pair.
///
/// The resolution engine produces at most one of these per pair: the
/// fallback loop stops at the first resolver that answers, so `dns_server`
/// names exactly the server that served the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Domain name as given in the input list.
    pub domain: String,
    /// Address of the resolver that answered the query.
    pub dns_server: String,
    /// Record type as given on the command line (e.g. `A`, `AAAA`, `CNAME`).
    pub record_type: String,
    /// Comma-joined answer values, in the order the resolver returned them.
    pub value: String,
}

/// Progress notification emitted after all record types for one domain
/// have been attempted. `completed` is 1-indexed and strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Number of domains fully attempted so far.
    pub completed: usize,
    /// Total number of domains in the batch.
    pub total: usize,
}
