//! Resolution engine: per-pair resolver fallback and batch iteration.
//!
//! The engine is deliberately sequential: one domain, one record type, one
//! resolver at a time. That trades throughput for deterministic
//! first-success semantics and failure logs that name exactly one server.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::error_handling::{FailureStats, QueryFailure};
use crate::models::{ProgressEvent, ResultRecord};

/// A query capability bound to one name server.
///
/// The engine depends on this seam instead of a concrete resolver so the
/// fallback logic is testable without a network. The production
/// implementation is [`super::ResolverEndpoint`].
#[async_trait]
pub trait QueryTransport: Sync {
    /// Address of the server this transport queries.
    fn server(&self) -> &str;

    /// Issues one query for (domain, record type) against this server only.
    ///
    /// Returns the answer values in server order, or a classified failure.
    async fn query(&self, domain: &str, record_type: &str) -> Result<Vec<String>, QueryFailure>;
}

/// Resolves one (domain, record type) pair with ordered resolver fallback.
///
/// Endpoints are tried strictly in the given order. The first success wins
/// and short-circuits: later endpoints are never consulted, even if they
/// might return a "better" answer. Every failure kind is handled the same
/// way (counted, logged at debug, next endpoint); only exhaustion of the
/// whole list is terminal.
///
/// Exactly one terminal notification is logged per call: the success line
/// naming the serving resolver, or the failure line naming the pair.
pub async fn resolve_one<T: QueryTransport>(
    domain: &str,
    record_type: &str,
    endpoints: &[T],
    stats: &FailureStats,
) -> Option<ResultRecord> {
    for endpoint in endpoints {
        match endpoint.query(domain, record_type).await {
            Ok(values) => {
                let record = ResultRecord {
                    domain: domain.to_string(),
                    dns_server: endpoint.server().to_string(),
                    record_type: record_type.to_string(),
                    value: values.join(", "),
                };
                info!(
                    "Resolved {domain} {record_type} via {}: {}",
                    endpoint.server(),
                    record.value
                );
                return Some(record);
            }
            Err(failure) => {
                stats.increment(failure.kind());
                debug!(
                    "{domain} {record_type} query against {} failed: {failure}",
                    endpoint.server()
                );
            }
        }
    }
    warn!(
        "No {record_type} record for {domain}: all {} resolver(s) exhausted",
        endpoints.len()
    );
    None
}

/// Resolves every (domain, record type) pair in the batch.
///
/// Iteration is domain-major: for each domain in input order, every record
/// type is attempted independently (a failed type never skips the remaining
/// types for that domain). Successful records are collected in
/// (domain order, then record-type order); absent pairs are simply omitted.
/// Downstream persistence appends in this order, so it is a contract, not
/// an accident.
///
/// After the last record type of each domain, one [`ProgressEvent`] is
/// delivered to `on_progress`. Empty `domains` or `record_types` yields an
/// empty result and no events.
pub async fn resolve_batch<T: QueryTransport>(
    domains: &[String],
    record_types: &[String],
    endpoints: &[T],
    stats: &FailureStats,
    mut on_progress: impl FnMut(ProgressEvent),
) -> Vec<ResultRecord> {
    let total = domains.len();
    let mut records = Vec::new();

    if record_types.is_empty() {
        return records;
    }

    for (index, domain) in domains.iter().enumerate() {
        for record_type in record_types {
            if let Some(record) = resolve_one(domain, record_type, endpoints, stats).await {
                records.push(record);
            }
        }
        on_progress(ProgressEvent {
            completed: index + 1,
            total,
        });
    }

    records
}
