//! Fatal-error path.
//!
//! [`fatal`] writes a fixed prefix plus an optional message plus a newline
//! to the environment's lowest-level error sink, unbuffered, then
//! terminates the program irreversibly. It never allocates and never
//! unwinds.
//!
//! The sink is a pair of process-wide hooks: a raw byte writer and a
//! non-returning trap. On a hosted build the defaults are stderr and an
//! immediate abort; on bare metal the defaults are a no-op writer and a
//! spin trap until the platform layer installs its debug channel via
//! [`install_fatal_hooks`].

use core::sync::atomic::{AtomicUsize, Ordering};

/// Raw byte writer for the fatal sink. Must not allocate or unwind.
pub type FatalWrite = fn(&[u8]);

/// Non-returning program termination.
pub type FatalTrap = fn() -> !;

const FATAL_PREFIX: &[u8] = b"fatal: ";

// Hook slots hold a `FatalWrite`/`FatalTrap` cast to usize; 0 means unset.
static FATAL_WRITE: AtomicUsize = AtomicUsize::new(0);
static FATAL_TRAP: AtomicUsize = AtomicUsize::new(0);

/// Installs the sink hooks for this process. Later installs win.
pub fn install_fatal_hooks(write: FatalWrite, trap: FatalTrap) {
    FATAL_WRITE.store(write as usize, Ordering::Release);
    FATAL_TRAP.store(trap as usize, Ordering::Release);
}

fn installed_write() -> FatalWrite {
    let raw = FATAL_WRITE.load(Ordering::Acquire);
    if raw == 0 {
        default_write
    } else {
        // Slot only ever holds a value stored from a `FatalWrite`.
        unsafe { core::mem::transmute::<usize, FatalWrite>(raw) }
    }
}

fn installed_trap() -> FatalTrap {
    let raw = FATAL_TRAP.load(Ordering::Acquire);
    if raw == 0 {
        default_trap
    } else {
        // Slot only ever holds a value stored from a `FatalTrap`.
        unsafe { core::mem::transmute::<usize, FatalTrap>(raw) }
    }
}

#[cfg(feature = "std")]
fn default_write(bytes: &[u8]) {
    use std::io::Write;
    let _ = std::io::stderr().lock().write_all(bytes);
}

#[cfg(not(feature = "std"))]
fn default_write(_bytes: &[u8]) {}

#[cfg(feature = "std")]
fn default_trap() -> ! {
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn default_trap() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

fn emit(write: FatalWrite, msg: Option<&[u8]>) {
    write(FATAL_PREFIX);
    if let Some(m) = msg {
        write(m);
    }
    write(b"\n");
}

/// Reports an unrecoverable error and terminates.
///
/// Emits `fatal: <msg>\n` (prefix and newline only when `msg` is `None`)
/// through the installed sink, then traps. Control never returns to the
/// caller.
pub fn fatal(msg: Option<&[u8]>) -> ! {
    emit(installed_write(), msg);
    installed_trap()()
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<u8>> = Mutex::new(Vec::new());

    fn capture(bytes: &[u8]) {
        CAPTURED.lock().unwrap().extend_from_slice(bytes);
    }

    #[test]
    fn test_emit_line_shape() {
        {
            CAPTURED.lock().unwrap().clear();
        }
        emit(capture, Some(b"boom"));
        assert_eq!(CAPTURED.lock().unwrap().as_slice(), b"fatal: boom\n");

        {
            CAPTURED.lock().unwrap().clear();
        }
        emit(capture, None);
        assert_eq!(CAPTURED.lock().unwrap().as_slice(), b"fatal: \n");
    }

    #[test]
    fn test_hook_roundtrip() {
        // Install/readback goes through the usize slots.
        fn noop_write(_b: &[u8]) {}
        fn trap() -> ! {
            std::process::abort()
        }
        install_fatal_hooks(noop_write, trap);
        assert_eq!(installed_write() as usize, noop_write as usize);
        assert_eq!(installed_trap() as usize, trap as usize);
        // Restore defaults for other tests in this process.
        FATAL_WRITE.store(0, Ordering::Release);
        FATAL_TRAP.store(0, Ordering::Release);
    }
}
