//! Network path trace via the platform traceroute tool

use crate::command::CommandRunner;
use crate::models::ProbeOutcome;
use crate::platform::{path_trace_command, PlatformFamily};
use std::time::Duration;

/// Path tracer delegating to traceroute/tracert
pub struct PathTracer {
    runner: CommandRunner,
    family: PlatformFamily,
    command_timeout: Duration,
}

impl PathTracer {
    pub fn new(runner: CommandRunner, command_timeout: Duration) -> Self {
        Self {
            runner,
            family: PlatformFamily::current(),
            command_timeout,
        }
    }

    /// Trace the path to `target`.
    ///
    /// Trace tools often exit non-zero on partial completion (hop
    /// timeouts); the exit code is taken at face value and the output is
    /// passed through opaquely, no hop-by-hop parsing.
    pub async fn trace(&self, target: &str) -> ProbeOutcome {
        let spec = path_trace_command(self.family, target);
        let result = self.runner.run(&spec.program, &spec.args, self.command_timeout).await;
        ProbeOutcome::from(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trace_outcome_is_always_populated() {
        let tracer = PathTracer::new(CommandRunner::new(), Duration::from_secs(10));
        let outcome = tracer.trace("definitely-not-reachable.invalid").await;

        // Whether the binary is missing, the host is unresolvable or the
        // trace times out, the outcome must carry explanatory output.
        assert!(!outcome.raw_output.is_empty());
    }
}
