//! Data model for diagnostic runs
//!
//! Every type here is assembled once per run and read-only afterwards. A
//! fresh report is produced for each `diagnose` call; nothing is shared
//! across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Outcome of a DNS lookup for the target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Whether the lookup returned at least one address
    pub success: bool,
    /// First address returned by the resolver
    pub primary_address: Option<IpAddr>,
    /// All addresses in resolver order (empty on failure)
    pub all_addresses: Vec<IpAddr>,
    /// Failure description when success is false
    pub error_detail: Option<String>,
}

impl ResolutionResult {
    /// Build a successful result from a non-empty address list.
    ///
    /// Invariant: `primary_address` equals the first element of
    /// `all_addresses`.
    pub fn resolved(addresses: Vec<IpAddr>) -> Self {
        debug_assert!(!addresses.is_empty());
        Self {
            success: true,
            primary_address: addresses.first().copied(),
            all_addresses: addresses,
            error_detail: None,
        }
    }

    /// Build a failed result carrying the resolver's error text.
    pub fn failed<S: Into<String>>(detail: S) -> Self {
        Self {
            success: false,
            primary_address: None,
            all_addresses: Vec::new(),
            error_detail: Some(detail.into()),
        }
    }
}

/// Captured result of one external command invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Process exit code (synthetic on launch failure or timeout)
    pub exit_code: i32,
    /// stdout followed by stderr, whitespace-trimmed
    pub combined_output: String,
}

impl CommandResult {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Shared shape for the reachability and path-trace probes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Derived from the tool's exit code: zero means success
    pub succeeded: bool,
    /// The tool's full output, preserved verbatim
    pub raw_output: String,
}

impl From<CommandResult> for ProbeOutcome {
    fn from(result: CommandResult) -> Self {
        Self {
            succeeded: result.succeeded(),
            raw_output: result.combined_output,
        }
    }
}

/// Classification of a single TCP connect attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortStatus {
    /// Connect completed within the timeout
    Open,
    /// Connect was refused or reset without timing out
    Closed,
    /// No answer within the configured connect timeout
    Timeout,
    /// Any other condition (unresolvable address, network unreachable)
    Error(String),
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Error(detail) => write!(f, "error ({})", detail),
        }
    }
}

/// Result of probing a single TCP port
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortProbeResult {
    pub port: u16,
    pub status: PortStatus,
}

/// Aggregate result of one diagnostic run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// The target as given by the user
    pub target: String,
    pub resolution: ResolutionResult,
    pub reachability: ProbeOutcome,
    pub path_trace: ProbeOutcome,
    /// One entry per configured port, in configured order
    pub port_results: Vec<PortProbeResult>,
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
}

impl DiagnosticReport {
    /// The address the port scan actually targeted: the resolved primary
    /// address when resolution succeeded, otherwise the raw target string.
    pub fn scan_target(&self) -> String {
        match self.resolution.primary_address {
            Some(addr) if self.resolution.success => addr.to_string(),
            _ => self.target.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn addr(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolution_success_invariant() {
        let result = ResolutionResult::resolved(vec![addr("93.184.216.34"), addr("93.184.216.35")]);
        assert!(result.success);
        assert_eq!(result.primary_address, Some(addr("93.184.216.34")));
        assert_eq!(result.all_addresses[0], addr("93.184.216.34"));
        assert_eq!(result.all_addresses.len(), 2);
        assert!(result.error_detail.is_none());
    }

    #[test]
    fn test_resolution_failure() {
        let result = ResolutionResult::failed("no records found");
        assert!(!result.success);
        assert!(result.primary_address.is_none());
        assert!(result.all_addresses.is_empty());
        assert_eq!(result.error_detail.as_deref(), Some("no records found"));
    }

    #[test]
    fn test_probe_outcome_from_command_result() {
        let ok = ProbeOutcome::from(CommandResult {
            exit_code: 0,
            combined_output: "4 packets transmitted".to_string(),
        });
        assert!(ok.succeeded);

        let failed = ProbeOutcome::from(CommandResult {
            exit_code: 1,
            combined_output: "unknown host".to_string(),
        });
        assert!(!failed.succeeded);
        assert_eq!(failed.raw_output, "unknown host");
    }

    #[test]
    fn test_port_status_display() {
        assert_eq!(PortStatus::Open.to_string(), "open");
        assert_eq!(PortStatus::Closed.to_string(), "closed");
        assert_eq!(PortStatus::Timeout.to_string(), "timeout");
        assert_eq!(
            PortStatus::Error("network unreachable".to_string()).to_string(),
            "error (network unreachable)"
        );
    }

    #[test]
    fn test_scan_target_prefers_resolved_address() {
        let report = DiagnosticReport {
            target: "example.com".to_string(),
            resolution: ResolutionResult::resolved(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))]),
            reachability: ProbeOutcome {
                succeeded: true,
                raw_output: String::new(),
            },
            path_trace: ProbeOutcome {
                succeeded: true,
                raw_output: String::new(),
            },
            port_results: Vec::new(),
            generated_at: Utc::now(),
        };
        assert_eq!(report.scan_target(), "93.184.216.34");
    }

    #[test]
    fn test_scan_target_falls_back_to_raw_target() {
        let report = DiagnosticReport {
            target: "unresolvable.invalid".to_string(),
            resolution: ResolutionResult::failed("NXDOMAIN"),
            reachability: ProbeOutcome {
                succeeded: false,
                raw_output: String::new(),
            },
            path_trace: ProbeOutcome {
                succeeded: false,
                raw_output: String::new(),
            },
            port_results: Vec::new(),
            generated_at: Utc::now(),
        };
        assert_eq!(report.scan_target(), "unresolvable.invalid");
    }

    #[test]
    fn test_report_serialization() {
        let report = DiagnosticReport {
            target: "127.0.0.1".to_string(),
            resolution: ResolutionResult::resolved(vec![addr("127.0.0.1")]),
            reachability: ProbeOutcome {
                succeeded: true,
                raw_output: "1 packets transmitted, 1 received, 0% packet loss".to_string(),
            },
            path_trace: ProbeOutcome {
                succeeded: false,
                raw_output: "traceroute: command not found".to_string(),
            },
            port_results: vec![PortProbeResult {
                port: 22,
                status: PortStatus::Closed,
            }],
            generated_at: Utc::now(),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"target\":\"127.0.0.1\""));
        assert!(json.contains("\"port\":22"));
    }
}
