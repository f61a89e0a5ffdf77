//! Kernel Dispatcher
//!
//! Receives a syscall number and arguments, walks the boundary-crossing
//! protocol, and hands the handler's result back to the trampoline.
//!
//! # Protocol (per call)
//! Idle → EnteredKernel → {Returned | Trapped}
//! - The enter-kernel line is written before the table lookup, so a trapped
//!   call is still observably "entered kernel, then rejected" rather than
//!   "never entered kernel"
//! - A trap (unknown number) produces no return-to-user line: the kernel
//!   never returns cleanly from a bad call
//! - The dispatcher carries no state between calls

use log::{trace, warn};

use crate::console::Console;
use crate::kprintln;

use super::abi::{Arg, ModeTransition, SyscallError, SyscallReturn};
use super::table::SyscallTable;

/// The simulated kernel: the syscall table plus the output channel its
/// services write to.
///
/// The table is built once here and closed over immutably; nothing can
/// register or remove handlers afterward.
#[derive(Debug)]
pub struct Kernel {
    table: SyscallTable,
    console: Console,
}

impl Kernel {
    /// Construct the kernel around an output channel.
    pub fn new(console: Console) -> Self {
        Self {
            table: SyscallTable::new(),
            console,
        }
    }

    /// Dispatch one syscall.
    ///
    /// Only the user-mode trampoline may call this; user code has no other
    /// path to the table or the handlers.
    ///
    /// # Errors
    /// - `InvalidSyscall(number)` when no handler is bound to `number`
    /// - `HandlerFailure` when the handler rejects its arguments or cannot
    ///   complete its side effect
    pub(super) fn dispatch(
        &self,
        number: usize,
        args: &[Arg],
    ) -> Result<SyscallReturn, SyscallError> {
        trace!("dispatch: syscall {number}, {} args", args.len());

        // Transition lines are best-effort: a lost diagnostic line must not
        // change dispatch semantics.
        let _ = kprintln!(self.console, "{}", ModeTransition::EnterKernel(number));

        let handler = self.table.lookup(number).ok_or_else(|| {
            warn!("trap: no handler bound to syscall {number}");
            SyscallError::InvalidSyscall(number)
        })?;

        // An erroring handler propagates before the return line is written,
        // same asymmetry as the trap path.
        let value = handler(&self.console, args)?;

        let _ = kprintln!(self.console, "{}", ModeTransition::ReturnUser);
        Ok(value)
    }
}
