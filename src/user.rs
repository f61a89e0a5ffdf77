//! User Program
//!
//! Demo driver for the syscall boundary. Everything here runs "in user
//! mode": the only kernel access is the numbered calls issued through the
//! trampoline, and its own status lines go to plain stdout, not the kernel
//! console.

use crate::syscall::{Arg, SyscallError, UserMode};

/// A number with no table entry, used to demonstrate trap handling.
const BOGUS_SYSCALL: usize = 99;

/// Run the demo program: one PRINT, one TIME, one deliberately invalid
/// call.
///
/// The invalid call is caught and reported here; only a genuine handler
/// failure propagates to the caller.
pub fn run(user: &UserMode<'_>) -> Result<(), SyscallError> {
    println!("user: starting");

    user.print("Hello from user program")?;

    let now = user.time()?;
    println!("user: received time {} ms since epoch", now.as_millis());

    // Arguments to an unregistered number are irrelevant; the kernel traps
    // on the lookup before any handler could see them.
    match user.invoke(BOGUS_SYSCALL, &[Arg::Int(0)]) {
        Err(SyscallError::InvalidSyscall(number)) => {
            println!("user: kernel rejected syscall {number}, continuing");
        }
        Err(other) => return Err(other),
        Ok(value) => {
            println!("user: syscall {BOGUS_SYSCALL} unexpectedly succeeded: {value:?}");
        }
    }

    println!("user: done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture::Capture;
    use crate::syscall::Kernel;

    #[test]
    fn test_run_survives_invalid_syscall() {
        let cap = Capture::new();
        let kernel = Kernel::new(cap.console());
        let user = UserMode::new(&kernel);

        assert!(run(&user).is_ok());

        let lines = cap.lines();
        let hello = lines
            .iter()
            .filter(|l| l.contains("Hello from user program"))
            .count();
        assert_eq!(hello, 1);
        assert!(lines
            .iter()
            .any(|l| l.contains("entering kernel mode for syscall 99")));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let cap = Capture::new();
        let kernel = Kernel::new(cap.console());
        let user = UserMode::new(&kernel);

        // PRINT succeeds and the message shows up once.
        user.print("test").unwrap();
        assert_eq!(cap.lines().iter().filter(|l| l.contains("test")).count(), 1);

        // An unknown number traps without panicking.
        assert_eq!(
            user.invoke(99, &[]),
            Err(SyscallError::InvalidSyscall(99))
        );

        // TIME still works afterward and reads a positive clock.
        let t = user.time().unwrap();
        assert!(t.as_millis() > 0);
    }

    #[test]
    fn test_malformed_print_propagates() {
        let kernel = Kernel::new(Capture::new().console());
        let user = UserMode::new(&kernel);

        let result = user.invoke(crate::syscall::numbers::SYS_PRINT, &[Arg::Int(7)]);
        assert!(matches!(result, Err(SyscallError::HandlerFailure(_))));
    }
}
