//! ICMP-echo reachability probe via the platform ping tool

use crate::command::CommandRunner;
use crate::models::ProbeOutcome;
use crate::platform::{reachability_command, PlatformFamily};
use std::time::Duration;

/// Fallback summary when no statistics line is recognized.
const SUMMARY_FALLBACK: &str = "See raw output.";

/// Reachability prober delegating to the platform's ping executable
pub struct ReachabilityProber {
    runner: CommandRunner,
    family: PlatformFamily,
    command_timeout: Duration,
}

impl ReachabilityProber {
    pub fn new(runner: CommandRunner, command_timeout: Duration) -> Self {
        Self {
            runner,
            family: PlatformFamily::current(),
            command_timeout,
        }
    }

    #[cfg(test)]
    fn with_family(mut self, family: PlatformFamily) -> Self {
        self.family = family;
        self
    }

    /// Ping `target` with `ping_count` echo requests.
    ///
    /// Success is derived solely from the exit code; a non-zero exit
    /// (unreachable host, missing permission) is a failed probe, never an
    /// error. The raw output is preserved verbatim.
    pub async fn probe(&self, target: &str, ping_count: u32) -> ProbeOutcome {
        let spec = reachability_command(self.family, target, ping_count);
        let result = self.runner.run(&spec.program, &spec.args, self.command_timeout).await;
        ProbeOutcome::from(result)
    }
}

/// Best-effort extraction of a single summary line from ping output.
///
/// Scans lines in reverse and returns the first one containing a
/// case-insensitive "loss" or "statistics" marker, or the Windows
/// "Packets:" counter. Ping output is locale- and version-dependent, so an
/// unrecognized format falls back to a fixed non-empty string rather than
/// failing.
pub fn summarize_ping(output: &str) -> String {
    for line in output.lines().rev() {
        let lower = line.to_lowercase();
        if lower.contains("loss") || lower.contains("statistics") || line.contains("Packets:") {
            return line.trim().to_string();
        }
    }
    SUMMARY_FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_linux_ping_output() {
        let output = "\
PING 127.0.0.1 (127.0.0.1) 56(84) bytes of data.
64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.031 ms

--- 127.0.0.1 ping statistics ---
1 packets transmitted, 1 received, 0% packet loss, time 0ms
rtt min/avg/max/mdev = 0.031/0.031/0.031/0.000 ms";

        let summary = summarize_ping(output);
        assert_eq!(
            summary,
            "1 packets transmitted, 1 received, 0% packet loss, time 0ms"
        );
    }

    #[test]
    fn test_summarize_windows_ping_output() {
        let output = "\
Pinging 127.0.0.1 with 32 bytes of data:
Reply from 127.0.0.1: bytes=32 time<1ms TTL=128

Ping statistics for 127.0.0.1:
    Packets: Sent = 4, Received = 4, Lost = 0 (0% loss),";

        let summary = summarize_ping(output);
        assert!(summary.contains("Packets:"));
    }

    #[test]
    fn test_summarize_picks_last_matching_line() {
        let output = "statistics header\nreal loss line at the end";
        assert_eq!(summarize_ping(output), "real loss line at the end");
    }

    #[test]
    fn test_summarize_unrecognized_output_falls_back() {
        assert_eq!(summarize_ping("garbled tool output"), SUMMARY_FALLBACK);
        assert_eq!(summarize_ping(""), SUMMARY_FALLBACK);
    }

    #[test]
    fn test_summary_is_case_insensitive() {
        let output = "Ping Statistics for host";
        assert_eq!(summarize_ping(output), "Ping Statistics for host");
    }

    #[tokio::test]
    async fn test_probe_failure_is_data() {
        let prober = ReachabilityProber::new(CommandRunner::new(), Duration::from_secs(10))
            .with_family(PlatformFamily::current());
        let outcome = prober.probe("definitely-not-reachable.invalid", 1).await;

        // Either ping is missing (launch failure) or it exits non-zero for
        // an unresolvable host; both must classify as a failed probe.
        assert!(!outcome.succeeded);
        assert!(!outcome.raw_output.is_empty());
    }
}
