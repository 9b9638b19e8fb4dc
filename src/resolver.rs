//! DNS resolution of the diagnostic target
//!
//! A single forward lookup per invocation, requesting all addresses. The
//! outcome is always a `ResolutionResult`; lookup failures (NXDOMAIN,
//! timeout, no network) are folded into the record so the remaining probes
//! run regardless.

use crate::models::ResolutionResult;
use trust_dns_resolver::{
    config::{ResolverConfig, ResolverOpts},
    system_conf, TokioAsyncResolver,
};

/// Forward DNS resolver backed by the system configuration
pub struct Resolver {
    inner: TokioAsyncResolver,
}

impl Resolver {
    /// Create a resolver from the system DNS configuration, falling back to
    /// a default public-resolver configuration when it cannot be read.
    pub fn new() -> Self {
        let inner = match system_conf::read_system_conf() {
            Ok((config, opts)) => TokioAsyncResolver::tokio(config, opts),
            Err(_) => TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        };
        Self { inner }
    }

    /// Resolve `target` to all of its addresses.
    ///
    /// On success the primary address is the first returned address and the
    /// full list preserves resolver order. No retries; callers needing
    /// retries are a separate concern.
    pub async fn resolve(&self, target: &str) -> ResolutionResult {
        match self.inner.lookup_ip(target).await {
            Ok(lookup) => {
                let addresses: Vec<_> = lookup.iter().collect();
                if addresses.is_empty() {
                    ResolutionResult::failed(format!("no addresses found for {}", target))
                } else {
                    ResolutionResult::resolved(addresses)
                }
            }
            Err(e) => ResolutionResult::failed(e.to_string()),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
