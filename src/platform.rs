//! Platform-conditional external command selection
//!
//! The reachability and path-trace tools differ between Windows and POSIX
//! platforms. The differences live in this one lookup table rather than
//! being scattered through the probes.

use which::which;

/// Platform family the tool is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Posix,
    Windows,
}

impl PlatformFamily {
    /// The family of the current build target.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

/// An external command invocation: program name plus argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

/// Ping invocation for the given platform family.
///
/// POSIX ping takes the echo-request count via `-c`, Windows via `-n`.
pub fn reachability_command(family: PlatformFamily, target: &str, count: u32) -> CommandSpec {
    let count_flag = match family {
        PlatformFamily::Posix => "-c",
        PlatformFamily::Windows => "-n",
    };
    CommandSpec {
        program: "ping".to_string(),
        args: vec![count_flag.to_string(), count.to_string(), target.to_string()],
    }
}

/// Traceroute invocation for the given platform family.
///
/// The binary is located on the search path when possible; otherwise the
/// bare name is used so a missing tool surfaces through the command
/// runner's launch-failure path instead of a separate check.
pub fn path_trace_command(family: PlatformFamily, target: &str) -> CommandSpec {
    let name = match family {
        PlatformFamily::Posix => "traceroute",
        PlatformFamily::Windows => "tracert",
    };
    let program = which(name)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| name.to_string());
    CommandSpec {
        program,
        args: vec![target.to_string()],
    }
}
