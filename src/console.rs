//! Kernel Output Channel
//!
//! The console is the simulated kernel's single output device. Everything
//! observable about a dispatch — mode-transition lines and handler side
//! effects — flows through here in execution order.
//!
//! # Concurrency
//! - The sink is guarded by a spinlock, so handlers running on separate
//!   threads serialize their output internally
//! - The syscall table itself needs no locking (immutable after build);
//!   the console is the only shared mutable resource on the dispatch path

use core::fmt;
use std::io::{self, Write};

use spin::Mutex;

/// The kernel's output channel.
///
/// Wraps any `io::Write` sink behind a spinlock. Production code writes to
/// stdout; tests substitute a capture buffer and read the lines back.
pub struct Console {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Create a console over an arbitrary sink.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Create a console over the process's stdout.
    pub fn stdout() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Write one line to the sink.
    ///
    /// Appends the newline and flushes, so each call is one complete,
    /// immediately visible log line.
    ///
    /// # Errors
    /// Propagates sink failures; callers decide whether a lost line is a
    /// handler failure or best-effort diagnostics.
    pub fn write_line(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_fmt(args)?;
        sink.write_all(b"\n")?;
        sink.flush()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Console { .. }")
    }
}

/// Println-style macro for the kernel console.
///
/// Evaluates to the `io::Result` of the write so call sites choose between
/// propagating the failure and `let _ =` best-effort output.
#[macro_export]
macro_rules! kprintln {
    ($console:expr) => {
        $console.write_line(format_args!(""))
    };
    ($console:expr, $($arg:tt)*) => {
        $console.write_line(format_args!($($arg)*))
    };
}
