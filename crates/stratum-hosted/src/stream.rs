//! Output over the host standard streams.
//!
//! Raw string output plus formatted output lowered to the host's
//! formatted-write primitive (`io::Write::write_fmt`). Failures pass
//! through as the host's own `io::Error`.

use std::fmt;
use std::io::{self, Write};

use stratum_core::fmt::NumBuf;

/// Writes `s` to standard output.
pub fn print(s: &str) -> io::Result<()> {
    io::stdout().lock().write_all(s.as_bytes())
}

/// Writes `s` and a newline to standard output.
pub fn println(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.write_all(b"\n")
}

/// Writes `s` to standard error.
pub fn eprint(s: &str) -> io::Result<()> {
    io::stderr().lock().write_all(s.as_bytes())
}

/// Writes `s` and a newline to standard error.
pub fn eprintln(s: &str) -> io::Result<()> {
    let mut out = io::stderr().lock();
    out.write_all(s.as_bytes())?;
    out.write_all(b"\n")
}

/// Lowers a preassembled format invocation to standard output.
///
/// Callers build `args` with `format_args!`; digit generation and padding
/// happen in the host's formatted-write machinery.
pub fn print_args(args: fmt::Arguments<'_>) -> io::Result<()> {
    io::stdout().lock().write_fmt(args)
}

/// Renders a format invocation into a caller-provided fixed buffer and
/// returns the text. The bounded-output analog of the stream writers: no
/// heap, and a buffer overrun reports through the core fatal path.
pub fn format_into<'a, const N: usize>(
    buf: &'a mut NumBuf<N>,
    args: fmt::Arguments<'_>,
) -> &'a str {
    buf.clear();
    let _ = fmt::Write::write_fmt(buf, args);
    buf.as_str()
}
