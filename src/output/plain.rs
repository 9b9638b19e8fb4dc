//! Plain text report formatter

use super::{section_banner, ReportFormatter};
use crate::error::Result;
use crate::models::DiagnosticReport;
use crate::probes::reachability::summarize_ping;
use std::fmt::Write as _;

/// Plain formatter producing the section-delimited text report
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_report(&self, report: &DiagnosticReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&section_banner("NETWORK DIAGNOSTICS"));
        writeln!(out, "Target: {}", report.target).ok();

        out.push_str(&section_banner("DNS LOOKUP"));
        if report.resolution.success {
            if let Some(primary) = report.resolution.primary_address {
                writeln!(out, "Primary IP: {}", primary).ok();
            }
            let all: Vec<String> = report
                .resolution
                .all_addresses
                .iter()
                .map(|a| a.to_string())
                .collect();
            writeln!(out, "All resolved IPs: {}", all.join(", ")).ok();
        } else {
            writeln!(out, "DNS resolution failed.").ok();
            if let Some(detail) = &report.resolution.error_detail {
                writeln!(out, "Details: {}", detail).ok();
            }
        }

        out.push_str(&section_banner("PING TEST"));
        if report.reachability.succeeded {
            writeln!(out, "Reachable.").ok();
        } else {
            writeln!(out, "Ping failed.").ok();
        }
        writeln!(out, "{}", summarize_ping(&report.reachability.raw_output)).ok();
        writeln!(out, "\n--- Raw ping output ---").ok();
        writeln!(out, "{}", report.reachability.raw_output).ok();

        out.push_str(&section_banner("TRACEROUTE"));
        if report.path_trace.succeeded {
            writeln!(out, "Traceroute completed (see below).").ok();
        } else {
            writeln!(out, "Traceroute failed or partially completed (see below).").ok();
        }
        writeln!(out, "{}", report.path_trace.raw_output).ok();

        out.push_str(&section_banner("PORT SCAN"));
        writeln!(out, "Scanned address: {}", report.scan_target()).ok();
        for result in &report.port_results {
            writeln!(out, "Port {}: {}", result.port, result.status).ok();
        }

        out.push_str(&section_banner("SUMMARY"));
        writeln!(out, "DNS OK:        {}", report.resolution.success).ok();
        writeln!(out, "Ping OK:       {}", report.reachability.succeeded).ok();
        writeln!(out, "Ports:").ok();
        for result in &report.port_results {
            writeln!(out, "  {:<5} -> {}", result.port, result.status).ok();
        }

        Ok(out)
    }
}
