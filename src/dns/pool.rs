//! Resolver pool: an ordered list of single-server query endpoints.
//!
//! Each endpoint wraps its own `TokioAsyncResolver` bound to exactly one
//! name server, so every failure is attributable to a single server and the
//! fallback order stays exactly the order the operator configured.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::TokioAsyncResolver;

use super::engine::QueryTransport;
use crate::error_handling::{ConfigError, QueryFailure};

const DNS_PORT: u16 = 53;

/// One configured name server and its dedicated resolver.
pub struct ResolverEndpoint {
    server: String,
    resolver: TokioAsyncResolver,
}

impl ResolverEndpoint {
    fn new(server: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let ip: IpAddr = server
            .parse()
            .map_err(|_| ConfigError::InvalidServerAddress(server.to_string()))?;

        // Exactly one name server per config: the endpoint must never
        // silently fail over to a different server on its own
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(
            SocketAddr::new(ip, DNS_PORT),
            Protocol::Udp,
        ));

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        // One attempt per endpoint; retrying is the engine's job, via the next endpoint
        opts.attempts = 1;
        // Prevent search-domain appending
        opts.ndots = 0;

        Ok(ResolverEndpoint {
            server: server.to_string(),
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait]
impl QueryTransport for ResolverEndpoint {
    fn server(&self) -> &str {
        &self.server
    }

    async fn query(&self, domain: &str, record_type: &str) -> Result<Vec<String>, QueryFailure> {
        // Record-type strings are free-form up to this point; an unknown
        // type fails here like any other malformed query input
        let rtype = RecordType::from_str(record_type)
            .map_err(|e| QueryFailure::Protocol(e.to_string()))?;

        let lookup = self
            .resolver
            .lookup(domain, rtype)
            .await
            .map_err(QueryFailure::from)?;

        let values: Vec<String> = lookup.iter().map(|rdata| rdata.to_string()).collect();
        if values.is_empty() {
            return Err(QueryFailure::NoAnswer);
        }
        Ok(values)
    }
}

/// Ordered, immutable list of resolver endpoints.
///
/// Construction order is the fallback priority order and is preserved
/// exactly as given.
pub struct ResolverPool {
    endpoints: Vec<ResolverEndpoint>,
}

impl ResolverPool {
    /// Builds one endpoint per server address.
    ///
    /// # Errors
    ///
    /// `ConfigError::NoResolvers` for an empty list, and
    /// `ConfigError::InvalidServerAddress` for an entry that does not parse
    /// as an IP address. Both are fatal before any query is sent; skipping
    /// a bad entry would silently reorder the configured fallback priority.
    pub fn new(servers: &[String], timeout: Duration) -> Result<Self, ConfigError> {
        if servers.is_empty() {
            return Err(ConfigError::NoResolvers);
        }
        let endpoints = servers
            .iter()
            .map(|server| ResolverEndpoint::new(server, timeout))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResolverPool { endpoints })
    }

    /// Endpoints in fallback priority order.
    pub fn endpoints(&self) -> &[ResolverEndpoint] {
        &self.endpoints
    }

    /// Number of configured endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True when the pool has no endpoints. Never true for a constructed
    /// pool; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
