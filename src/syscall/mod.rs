//! System Call Boundary
//!
//! Simulates the user/kernel syscall contract: numbered calls, a fixed
//! handler table, observable mode transitions, and a typed trap on unknown
//! numbers.
//!
//! # Boundary Model
//! - User code gets `Kernel::new` and the `UserMode` trampoline, nothing else
//! - The table, the handlers, and the dispatch entry point stay private to
//!   this module, so kernel behavior is reachable only by syscall number
//!
//! # Current Syscalls
//! - 0: print(message) - write a message to the kernel console
//! - 1: time() - read the wall clock

mod abi;
mod dispatch;
mod handlers;
mod table;
mod usys;

pub use abi::{Arg, ModeTransition, SyscallError, SyscallReturn};
pub use dispatch::Kernel;
pub use table::numbers;
pub use usys::UserMode;
