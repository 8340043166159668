//! # stratum-hosted
//!
//! The OS-backed tier of the Stratum runtime: file handles over the host's
//! file service and formatted output over the host's standard streams.
//! Everything here is a thin delegation: success and failure indicators
//! from the OS pass through unchanged, and nothing is retried.
//!
//! This crate is only linked into hosted builds; the facade crate's
//! feature gating keeps it unreachable from embedded programs.

#![forbid(unsafe_code)]

pub mod file;
pub mod stream;

pub use file::{FileError, HostFile, OpenFlags, parse_mode};
pub use stream::{eprint, eprintln, format_into, print, print_args, println};

use std::io::Write;

fn stderr_write(bytes: &[u8]) {
    let _ = std::io::stderr().lock().write_all(bytes);
}

fn abort_trap() -> ! {
    std::process::abort()
}

/// Routes the core fatal path to this process's stderr and abort.
///
/// The core tier already defaults to these on hosted builds; calling this
/// makes the wiring explicit in program startup. Idempotent.
pub fn init() {
    stratum_core::fatal::install_fatal_hooks(stderr_write, abort_trap);
}
