//! Command-line interface definition

use crate::defaults;
use clap::{ArgAction, Parser};

/// Network Diagnostics Toolkit - DNS lookup, ping, traceroute and TCP port scan
#[derive(Parser, Debug, Clone)]
#[command(name = "netdiag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hostname or IP address to diagnose (prompted for when omitted)
    pub target: Option<String>,

    /// Number of ping echo requests
    #[arg(short, long, env = "NETDIAG_COUNT", default_value_t = defaults::DEFAULT_PING_COUNT)]
    pub count: u32,

    /// TCP port to probe (can be used multiple times; defaults to 22, 80, 443)
    #[arg(short = 'p', long = "port", action = ArgAction::Append)]
    pub ports: Vec<u16>,

    /// External command timeout in seconds
    #[arg(short, long, env = "NETDIAG_TIMEOUT", default_value_t = defaults::DEFAULT_COMMAND_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Per-port TCP connect timeout in milliseconds
    #[arg(long, env = "NETDIAG_CONNECT_TIMEOUT", default_value_t = defaults::DEFAULT_CONNECT_TIMEOUT.as_millis() as u64)]
    pub connect_timeout: u64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }
        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color || self.json {
            false
        } else {
            supports_color()
        }
    }
}

/// Automatic color detection honoring the NO_COLOR convention
fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
