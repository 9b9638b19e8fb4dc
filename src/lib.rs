//! Network Diagnostics Toolkit
//!
//! A single-target network diagnostics tool that resolves DNS, checks
//! reachability with the platform ping tool, traces the network path and
//! probes a configurable set of TCP ports, then produces a consolidated
//! report.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod platform;
pub mod probes;
pub mod resolver;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{
    CommandResult, DiagnosticReport, PortProbeResult, PortStatus, ProbeOutcome, ResolutionResult,
};
pub use orchestrator::DiagnosticOrchestrator;
pub use output::{formatter_for, ColoredFormatter, PlainFormatter, ReportFormatter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_PING_COUNT: u32 = 4;
    pub const DEFAULT_PORTS: &[u16] = &[22, 80, 443];
    pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(2000);
}
