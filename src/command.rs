//! Bounded-timeout execution of external diagnostic commands
//!
//! Every failure path (missing binary, permission denied, timeout) is
//! returned as a `CommandResult` rather than an error so the orchestrator
//! can continue with the remaining probes.

use crate::models::CommandResult;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Synthetic exit code reported when a command exceeds its timeout.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Runs external OS commands with a hard wall-clock timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `program` with `args` and capture combined output.
    ///
    /// Arguments are passed as a vector, never through a shell. Standard
    /// output and standard error are concatenated in that order and
    /// whitespace-trimmed. On timeout the child is killed and a synthetic
    /// failure result is returned.
    pub async fn run(&self, program: &str, args: &[String], limit: Duration) -> CommandResult {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return CommandResult {
                    exit_code: 1,
                    combined_output: format!(
                        "Error running command {} {}: {}",
                        program,
                        args.join(" "),
                        e
                    ),
                };
            }
        };

        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                CommandResult {
                    // Signal-terminated children carry no code
                    exit_code: output.status.code().unwrap_or(-1),
                    combined_output: combined.trim().to_string(),
                }
            }
            Ok(Err(e)) => CommandResult {
                exit_code: 1,
                combined_output: format!("Error collecting output from {}: {}", program, e),
            },
            // Dropping the wait future kills the child (kill_on_drop).
            Err(_) => CommandResult {
                exit_code: TIMEOUT_EXIT_CODE,
                combined_output: format!(
                    "Command {} timed out after {} seconds and was terminated",
                    program,
                    limit.as_secs_f64()
                ),
            },
        }
    }
}
