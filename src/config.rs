//! Diagnostic run configuration and validation

use crate::cli::Cli;
use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one diagnostic run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Number of ping echo requests
    #[serde(default = "default_ping_count")]
    pub ping_count: u32,

    /// TCP ports to probe, in probe order
    #[serde(default = "default_ports")]
    pub ports: Vec<u16>,

    /// Hard wall-clock timeout for each external command, in seconds
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_seconds: u64,

    /// Per-port TCP connect timeout, in milliseconds
    #[serde(default = "default_connect_timeout_millis")]
    pub connect_timeout_millis: u64,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

fn default_ping_count() -> u32 {
    defaults::DEFAULT_PING_COUNT
}

fn default_ports() -> Vec<u16> {
    defaults::DEFAULT_PORTS.to_vec()
}

fn default_command_timeout_secs() -> u64 {
    defaults::DEFAULT_COMMAND_TIMEOUT.as_secs()
}

fn default_connect_timeout_millis() -> u64 {
    defaults::DEFAULT_CONNECT_TIMEOUT.as_millis() as u64
}

fn default_enable_color() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            ping_count: default_ping_count(),
            ports: default_ports(),
            command_timeout_seconds: default_command_timeout_secs(),
            connect_timeout_millis: default_connect_timeout_millis(),
            enable_color: default_enable_color(),
            verbose: false,
        }
    }
}

impl DiagnosticsConfig {
    /// Get the external command timeout as a Duration
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_seconds)
    }

    /// Get the per-port connect timeout as a Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_millis)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.ping_count == 0 {
            return Err(AppError::config("Ping count must be greater than 0"));
        }
        if self.ping_count > 100 {
            return Err(AppError::config("Ping count cannot exceed 100"));
        }

        if self.ports.is_empty() {
            return Err(AppError::config("Port list cannot be empty"));
        }
        for &port in &self.ports {
            if port == 0 {
                return Err(AppError::config("Port 0 is not a valid probe target"));
            }
        }

        if self.command_timeout_seconds == 0 {
            return Err(AppError::config("Command timeout must be greater than 0"));
        }
        if self.command_timeout_seconds > 300 {
            return Err(AppError::config("Command timeout cannot exceed 300 seconds"));
        }

        if self.connect_timeout_millis == 0 {
            return Err(AppError::config("Connect timeout must be greater than 0"));
        }
        if self.connect_timeout_millis > 60_000 {
            return Err(AppError::config("Connect timeout cannot exceed 60 seconds"));
        }

        Ok(())
    }
}

/// Build the run configuration from CLI arguments.
///
/// `NETDIAG_*` environment variables (including those from a `.env` file
/// loaded at startup) are applied by the clap `env` attributes; explicit
/// flags win.
pub fn load_config(cli: &Cli) -> Result<DiagnosticsConfig> {
    let config = DiagnosticsConfig {
        ping_count: cli.count,
        ports: if cli.ports.is_empty() {
            default_ports()
        } else {
            cli.ports.clone()
        },
        command_timeout_seconds: cli.timeout,
        connect_timeout_millis: cli.connect_timeout,
        enable_color: cli.use_colors(),
        verbose: cli.verbose,
    };

    config.validate()?;
    Ok(config)
}
