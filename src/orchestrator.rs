//! Runs all probes against one target and assembles the report
//!
//! Resolution runs first because its primary address feeds the port-scan
//! target choice. The reachability, path-trace and port probes then run
//! concurrently and are joined before assembly; each one's failure is
//! isolated and recorded independently. Note the deliberate asymmetry: the
//! port scan targets the resolved primary address, while ping and
//! traceroute receive the original target string.

use crate::command::CommandRunner;
use crate::config::DiagnosticsConfig;
use crate::models::DiagnosticReport;
use crate::probes::{PathTracer, PortScanner, ReachabilityProber};
use crate::resolver::Resolver;
use chrono::Utc;

/// Orchestrates one diagnostic run; holds no state between runs
pub struct DiagnosticOrchestrator {
    resolver: Resolver,
}

impl DiagnosticOrchestrator {
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
        }
    }

    /// Run the full diagnosis against `target`.
    ///
    /// Always returns a fully populated report: DNS failure does not
    /// short-circuit the remaining probes, and no probe failure terminates
    /// the run. There is no overall success flag; the presentation layer
    /// interprets each sub-result.
    pub async fn diagnose(&self, target: &str, config: &DiagnosticsConfig) -> DiagnosticReport {
        let resolution = self.resolver.resolve(target).await;

        let scan_target = match resolution.primary_address {
            Some(addr) if resolution.success => addr.to_string(),
            _ => target.to_string(),
        };

        let runner = CommandRunner::new();
        let prober = ReachabilityProber::new(runner, config.command_timeout());
        let tracer = PathTracer::new(runner, config.command_timeout());
        let scanner = PortScanner::new(config.connect_timeout());

        let (reachability, path_trace, port_results) = tokio::join!(
            prober.probe(target, config.ping_count),
            tracer.trace(target),
            scanner.scan(&scan_target, &config.ports),
        );

        DiagnosticReport {
            target: target.to_string(),
            resolution,
            reachability,
            path_trace,
            port_results,
            generated_at: Utc::now(),
        }
    }
}

impl Default for DiagnosticOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
