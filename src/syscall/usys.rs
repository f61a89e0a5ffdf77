//! User-Mode Trampoline
//!
//! The only surface a user program may use to reach kernel behavior. In a
//! real kernel this would be the assembly syscall stubs; here it is a thin
//! forwarder that simulates crossing the boundary by number, never by
//! direct call. The table, the handlers, and `Kernel::dispatch` are all
//! private to this module tree, so the encapsulation is checked by the
//! compiler rather than at runtime.

use std::time::Duration;

use super::abi::{Arg, SyscallError, SyscallReturn};
use super::dispatch::Kernel;
use super::table::numbers;

/// A user-mode view of the kernel.
///
/// Borrows the kernel immutably; any number of user-mode callers may issue
/// syscalls concurrently.
#[derive(Debug, Clone, Copy)]
pub struct UserMode<'k> {
    kernel: &'k Kernel,
}

impl<'k> UserMode<'k> {
    pub fn new(kernel: &'k Kernel) -> Self {
        Self { kernel }
    }

    /// Issue a raw numbered syscall.
    ///
    /// Blocks until the handler returns or the kernel traps the number.
    pub fn invoke(
        &self,
        number: usize,
        args: &[Arg],
    ) -> Result<SyscallReturn, SyscallError> {
        self.kernel.dispatch(number, args)
    }

    /// Stub for the PRINT syscall.
    pub fn print(&self, message: &str) -> Result<(), SyscallError> {
        self.invoke(numbers::SYS_PRINT, &[Arg::str(message)])?;
        Ok(())
    }

    /// Stub for the TIME syscall.
    pub fn time(&self) -> Result<Duration, SyscallError> {
        self.invoke(numbers::SYS_TIME, &[])?
            .as_time()
            .ok_or_else(|| {
                SyscallError::HandlerFailure("time syscall returned no timestamp".into())
            })
    }
}
