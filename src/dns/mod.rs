//! DNS resolution core: the resolver pool and the fallback engine.

mod engine;
mod pool;


pub use engine::{resolve_batch, resolve_one, QueryTransport};
pub use pool::{ResolverEndpoint, ResolverPool};
