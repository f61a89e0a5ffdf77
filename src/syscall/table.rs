//! Syscall Table
//!
//! Fixed mapping from syscall number to kernel service handler, indexed by
//! slot. Built once when the kernel is constructed and never mutated —
//! there is no registration API, so concurrent lookups need no locking.

use crate::console::Console;

use super::abi::{Arg, SyscallError, SyscallReturn};
use super::handlers;

/// Syscall numbers.
///
/// The closed, enumerated set of services this kernel provides. Every number
/// actually dispatched must appear here, or the dispatcher traps the call.
pub mod numbers {
    /// print(message) — write a message to the kernel console
    pub const SYS_PRINT: usize = 0;
    /// time() — read the wall clock
    pub const SYS_TIME: usize = 1;
}

/// A kernel service handler: validates its own arguments, performs its one
/// side effect, returns a result. Plain `fn` pointers keep the table `Sync`
/// and forbid cross-call state.
pub type SyscallHandler = fn(&Console, &[Arg]) -> Result<SyscallReturn, SyscallError>;

/// Number of table slots. Numbers at or beyond this are unregistered by
/// definition.
const TABLE_SIZE: usize = 16;

/// The syscall table: one optional handler per slot, `None` meaning
/// unimplemented.
pub struct SyscallTable {
    slots: [Option<SyscallHandler>; TABLE_SIZE],
}

impl core::fmt::Debug for SyscallTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let bound = self.slots.iter().filter(|s| s.is_some()).count();
        write!(f, "SyscallTable {{ bound: {bound}/{TABLE_SIZE} }}")
    }
}

impl SyscallTable {
    /// Build the table, binding every registered number to its handler.
    pub const fn new() -> Self {
        let mut slots: [Option<SyscallHandler>; TABLE_SIZE] = [None; TABLE_SIZE];

        slots[numbers::SYS_PRINT] = Some(handlers::sys_print as SyscallHandler);
        slots[numbers::SYS_TIME] = Some(handlers::sys_time as SyscallHandler);

        Self { slots }
    }

    /// Look up the handler bound to `number`.
    ///
    /// Returns `None` for every unregistered number, including anything
    /// outside the table's slot range.
    pub fn lookup(&self, number: usize) -> Option<SyscallHandler> {
        self.slots.get(number).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_numbers_resolve() {
        let table = SyscallTable::new();
        assert!(table.lookup(numbers::SYS_PRINT).is_some());
        assert!(table.lookup(numbers::SYS_TIME).is_some());
    }

    #[test]
    fn test_unregistered_numbers_absent() {
        let table = SyscallTable::new();
        // Exhaustive probe over a small domain: in-range unbound slots,
        // out-of-range numbers, and the wrapped -1.
        for number in [2, 99, 999, usize::MAX] {
            assert!(table.lookup(number).is_none(), "number {number} should be absent");
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let table = SyscallTable::new();
        let first = table.lookup(numbers::SYS_PRINT);
        let second = table.lookup(numbers::SYS_PRINT);
        assert_eq!(first.is_some(), second.is_some());
    }
}
