//! Syscall ABI Types
//!
//! The value vocabulary crossing the user/kernel boundary: arguments,
//! return values, the error taxonomy, and the mode-transition records the
//! dispatcher emits.

use core::fmt;
use std::time::Duration;

use thiserror::Error;

/// One argument in a syscall's variable-length argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Str(String),
    Int(u64),
}

impl Arg {
    /// Convenience constructor for string arguments.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }
}

/// Successful result of a dispatched syscall.
///
/// The variant depends on the handler: PRINT acknowledges, TIME carries the
/// wall-clock reading as a duration since the Unix epoch (millisecond
/// resolution or better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyscallReturn {
    Ack,
    Time(Duration),
}

impl SyscallReturn {
    /// The timestamp payload, if this is a TIME result.
    pub fn as_time(&self) -> Option<Duration> {
        match self {
            Self::Time(t) => Some(*t),
            Self::Ack => None,
        }
    }
}

/// Syscall failure taxonomy.
///
/// Both variants propagate synchronously through the trampoline to the
/// caller; the dispatcher never retries and never aborts the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyscallError {
    /// No handler is bound to the requested number. The kernel traps the
    /// call without a clean return to user mode.
    #[error("invalid syscall number {0}")]
    InvalidSyscall(usize),

    /// A handler rejected its arguments or could not complete its side
    /// effect (e.g. an unwritable output channel).
    #[error("syscall handler failed: {0}")]
    HandlerFailure(String),
}

/// An observable boundary crossing, rendered as one console line per event.
///
/// Ephemeral: produced during a dispatch, written, discarded. Nothing stores
/// these across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Control enters kernel mode to service the numbered call.
    EnterKernel(usize),
    /// Control returns to user mode after a successful handler run.
    ReturnUser,
}

impl fmt::Display for ModeTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnterKernel(number) => {
                write!(f, "entering kernel mode for syscall {number}")
            }
            Self::ReturnUser => f.write_str("returning to user mode"),
        }
    }
}
