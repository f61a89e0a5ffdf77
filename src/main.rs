//! trapgate - Syscall Boundary Simulator
//!
//! Models a minimal OS syscall boundary in user space: a demo user program
//! issues numbered calls through a trampoline, a dispatcher logs the
//! simulated mode transitions, looks the number up in a fixed handler
//! table, and hands the result (or a typed trap) back.
//!
//! # Boundary Contract
//! - Kernel behavior is reachable only by syscall number, never by direct
//!   call (enforced by module visibility)
//! - The handler table is built once and never mutated
//! - An unknown number traps: the enter-kernel line is observable, the
//!   return-to-user line is not
//!
//! # Not Modeled
//! - Real privilege separation, memory protection, or mode switching
//! - Scheduling of multiple user programs
//! - Persistence of any kind

#![deny(unsafe_code)]

mod console;
mod syscall;
mod user;

use anyhow::Context;
use log::info;

use console::Console;
use syscall::{Kernel, UserMode};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("trapgate v{}", env!("CARGO_PKG_VERSION"));

    // Table and console are fixed for the life of the process from here on.
    let kernel = Kernel::new(Console::stdout());
    let user_mode = UserMode::new(&kernel);
    info!("syscall table built, entering user mode");

    user::run(&user_mode).context("user program failed")?;

    Ok(())
}
