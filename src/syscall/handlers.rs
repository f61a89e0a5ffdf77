//! Kernel Service Handlers
//!
//! The leaf functions behind each syscall number. Each handler validates its
//! own argument shape, performs exactly one observable effect (writing a
//! line, sampling the clock), and holds no state across calls.
//!
//! Malformed arguments are rejected with `HandlerFailure`, never a panic.

use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::console::Console;
use crate::kprintln;

use super::abi::{Arg, SyscallError, SyscallReturn};

/// print(message) — write `message` on its own line to the kernel console.
///
/// Expects exactly one string argument. An unwritable console surfaces as a
/// `HandlerFailure` rather than being swallowed.
pub(super) fn sys_print(
    console: &Console,
    args: &[Arg],
) -> Result<SyscallReturn, SyscallError> {
    let message = match args {
        [Arg::Str(message)] => message,
        _ => {
            return Err(SyscallError::HandlerFailure(format!(
                "print expects one string argument, got {args:?}"
            )))
        }
    };

    debug!("print: {} bytes", message.len());
    kprintln!(console, "{message}").map_err(|err| {
        SyscallError::HandlerFailure(format!("output channel unavailable: {err}"))
    })?;

    Ok(SyscallReturn::Ack)
}

/// time() — read the wall clock.
///
/// Takes no arguments; returns the duration since the Unix epoch. The system
/// clock sitting before the epoch is reported as a failure, not a panic.
pub(super) fn sys_time(
    _console: &Console,
    args: &[Arg],
) -> Result<SyscallReturn, SyscallError> {
    if !args.is_empty() {
        return Err(SyscallError::HandlerFailure(format!(
            "time expects no arguments, got {}",
            args.len()
        )));
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| SyscallError::HandlerFailure(format!("clock before epoch: {err}")))?;

    debug!("time: {} ms since epoch", now.as_millis());
    Ok(SyscallReturn::Time(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture::Capture;

    #[test]
    fn test_print_writes_message_once() {
        let cap = Capture::new();
        let console = cap.console();
        let result = sys_print(&console, &[Arg::str("Hello from user program")]);
        assert_eq!(result, Ok(SyscallReturn::Ack));

        let lines = cap.lines();
        let hits = lines
            .iter()
            .filter(|l| l.contains("Hello from user program"))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_print_rejects_missing_argument() {
        let console = Capture::new().console();
        assert!(matches!(
            sys_print(&console, &[]),
            Err(SyscallError::HandlerFailure(_))
        ));
    }

    #[test]
    fn test_print_rejects_wrong_type() {
        let console = Capture::new().console();
        assert!(matches!(
            sys_print(&console, &[Arg::Int(42)]),
            Err(SyscallError::HandlerFailure(_))
        ));
    }

    #[test]
    fn test_time_is_positive_and_monotonic_enough() {
        let console = Capture::new().console();
        let first = sys_time(&console, &[]).unwrap().as_time().unwrap();
        let second = sys_time(&console, &[]).unwrap().as_time().unwrap();
        assert!(first.as_millis() > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_time_rejects_arguments() {
        let console = Capture::new().console();
        assert!(matches!(
            sys_time(&console, &[Arg::Int(1)]),
            Err(SyscallError::HandlerFailure(_))
        ));
    }
}
