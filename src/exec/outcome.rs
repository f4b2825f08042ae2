// src/exec/outcome.rs

//! Result of a single process execution.

use std::process::ExitStatus;

/// Code reported when the process could not be launched (or produced no
/// usable exit status).
pub const EXECUTION_FAILED: i32 = -1;

/// Code reported when the caller interrupted the wait for the process.
pub const EXECUTION_INTERRUPTED: i32 = -2;

/// How an execution ended.
///
/// The integer-returning `execute*` functions flatten this into a single
/// `i32` via [`ExitOutcome::code`]. Note that the negative sentinels are not
/// guaranteed to be disjoint from a real exit code on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The process terminated and reported this exit code.
    Exited(i32),
    /// The process could not be started.
    LaunchFailed,
    /// The wait for the process was interrupted. Its output was still
    /// drained, then the process was killed.
    Interrupted,
}

impl ExitOutcome {
    /// Flatten into the integer return channel.
    pub fn code(self) -> i32 {
        match self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::LaunchFailed => EXECUTION_FAILED,
            ExitOutcome::Interrupted => EXECUTION_INTERRUPTED,
        }
    }

    pub fn success(self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

impl From<ExitStatus> for ExitOutcome {
    /// Processes terminated by a signal report `128 + signal`, the usual
    /// shell convention. Anything else without a code maps to
    /// [`EXECUTION_FAILED`].
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Exited(128 + signal);
            }
        }

        ExitOutcome::Exited(EXECUTION_FAILED)
    }
}
