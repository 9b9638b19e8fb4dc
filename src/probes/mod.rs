//! The independent diagnostic probes
//!
//! Each probe owns its own process handle or socket for its lifetime and
//! reports its outcome as data; no probe failure aborts the others.

pub mod ports;
pub mod reachability;
pub mod trace;

pub use ports::PortScanner;
pub use reachability::ReachabilityProber;
pub use trace::PathTracer;
