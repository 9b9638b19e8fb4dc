//! TCP connect scanning of a fixed port list

use crate::models::{PortProbeResult, PortStatus};
use futures::future::join_all;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Bounded-timeout TCP connect scanner
pub struct PortScanner {
    connect_timeout: Duration,
}

impl PortScanner {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }

    /// Probe each port in `ports` against `address`.
    ///
    /// Returns one result per requested port, in the requested order, no
    /// matter which attempts complete first or fail. Each attempt is
    /// independent; nothing is sent after the handshake and the socket is
    /// closed immediately after classification.
    pub async fn scan(&self, address: &str, ports: &[u16]) -> Vec<PortProbeResult> {
        let attempts = ports.iter().map(|&port| self.probe_port(address, port));
        join_all(attempts).await
    }

    async fn probe_port(&self, address: &str, port: u16) -> PortProbeResult {
        let status = match timeout(self.connect_timeout, TcpStream::connect((address, port))).await {
            Ok(Ok(_stream)) => PortStatus::Open,
            Ok(Err(e)) => classify_connect_error(&e),
            Err(_) => PortStatus::Timeout,
        };
        PortProbeResult { port, status }
    }
}

/// Map a connect error to a port status.
///
/// Active rejection by the peer is Closed; everything else (unresolvable
/// address, unreachable network) is an Error carrying the detail.
fn classify_connect_error(e: &std::io::Error) -> PortStatus {
    match e.kind() {
        ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
            PortStatus::Closed
        }
        ErrorKind::TimedOut => PortStatus::Timeout,
        _ => PortStatus::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_listening_port_classifies_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let scanner = PortScanner::new(Duration::from_secs(2));
        let results = scanner.scan("127.0.0.1", &[port]).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].port, port);
        assert_eq!(results[0].status, PortStatus::Open);
    }

    #[tokio::test]
    async fn test_refused_port_classifies_closed() {
        // Bind then drop to obtain a loopback port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        let scanner = PortScanner::new(Duration::from_secs(2));
        let results = scanner.scan("127.0.0.1", &[port]).await;

        assert_eq!(results[0].status, PortStatus::Closed);
    }

    #[tokio::test]
    async fn test_result_order_matches_requested_order() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open_port = listener.local_addr().unwrap().port();
        let closed_port = {
            let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
            l.local_addr().unwrap().port()
        };

        let requested = [closed_port, open_port, closed_port];
        let scanner = PortScanner::new(Duration::from_secs(2));
        let results = scanner.scan("127.0.0.1", &requested).await;

        assert_eq!(results.len(), 3);
        for (result, &port) in results.iter().zip(requested.iter()) {
            assert_eq!(result.port, port);
        }
        assert_eq!(results[1].status, PortStatus::Open);
        assert_eq!(results[0].status, PortStatus::Closed);
        assert_eq!(results[2].status, PortStatus::Closed);
    }

    #[tokio::test]
    async fn test_one_bad_port_does_not_abort_the_rest() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open_port = listener.local_addr().unwrap().port();

        // TEST-NET-1 is blackholed; the attempt must end at the timeout,
        // not hang, and must not affect the loopback result.
        let scanner = PortScanner::new(Duration::from_millis(200));
        let start = std::time::Instant::now();
        let blackhole = scanner.scan("192.0.2.1", &[open_port]).await;
        let local = scanner.scan("127.0.0.1", &[open_port]).await;

        assert!(start.elapsed() < Duration::from_secs(5));
        assert_ne!(blackhole[0].status, PortStatus::Open);
        assert_eq!(local[0].status, PortStatus::Open);
    }

    #[tokio::test]
    async fn test_unresolvable_address_classifies_error() {
        let scanner = PortScanner::new(Duration::from_secs(2));
        let results = scanner.scan("host.invalid", &[80]).await;

        assert_eq!(results.len(), 1);
        match &results[0].status {
            PortStatus::Error(detail) => assert!(!detail.is_empty()),
            PortStatus::Timeout => {} // a slow resolver can hit the connect timeout first
            other => panic!("expected error or timeout, got {:?}", other),
        }
    }
}
