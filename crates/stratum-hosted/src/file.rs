//! File handles over the host OS file service.
//!
//! `HostFile` owns one OS file handle, opened from a C-style mode string.
//! Each operation delegates directly to the host and passes its
//! success/failure signaling through unchanged.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use thiserror::Error;

/// Errors from the hosted file surface.
#[derive(Debug, Error)]
pub enum FileError {
    /// The open mode string was not a valid mode.
    #[error("invalid open mode `{mode}`")]
    InvalidMode { mode: String },
    /// The handle was opened without read access.
    #[error("stream not open for reading")]
    NotReadable,
    /// The handle was opened without write access.
    #[error("stream not open for writing")]
    NotWritable,
    /// The host reported a failure; passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// File open mode flags, parsed from a mode string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenFlags {
    pub readable: bool,
    pub writable: bool,
    pub append: bool,
    pub truncate: bool,
    pub create: bool,
    pub exclusive: bool,
    pub binary: bool,
}

/// Parses a C-style fopen mode string (e.g. `"r"`, `"w+"`, `"rb"`,
/// `"a+b"`, `"wx"`).
///
/// Returns `None` if the mode string is invalid.
pub fn parse_mode(mode: &str) -> Option<OpenFlags> {
    let mode = mode.as_bytes();
    if mode.is_empty() {
        return None;
    }

    let mut flags = OpenFlags::default();
    match mode[0] {
        b'r' => {
            flags.readable = true;
        }
        b'w' => {
            flags.writable = true;
            flags.create = true;
            flags.truncate = true;
        }
        b'a' => {
            flags.writable = true;
            flags.create = true;
            flags.append = true;
        }
        _ => return None,
    }

    // Modifiers: '+', 'b', 'x' in any order.
    for &c in &mode[1..] {
        match c {
            b'+' => {
                flags.readable = true;
                flags.writable = true;
            }
            b'b' => flags.binary = true,
            b'x' => flags.exclusive = true,
            _ => return None,
        }
    }

    Some(flags)
}

/// An owned handle to one host file.
///
/// The handle is exclusively owned by the caller that opened it; the OS
/// handle is released when the value drops, or explicitly via
/// [`HostFile::close`].
#[derive(Debug)]
pub struct HostFile {
    file: File,
    flags: OpenFlags,
}

impl HostFile {
    /// Opens `path` with a C-style mode string.
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self, FileError> {
        let flags = parse_mode(mode).ok_or_else(|| FileError::InvalidMode {
            mode: mode.to_string(),
        })?;

        let mut options = OpenOptions::new();
        options
            .read(flags.readable)
            .write(flags.writable && !flags.append)
            .append(flags.append)
            .truncate(flags.truncate)
            .create(flags.create && !flags.exclusive)
            .create_new(flags.exclusive);

        let file = options.open(path)?;
        Ok(Self { file, flags })
    }

    /// The flags this handle was opened with.
    pub fn flags(&self) -> OpenFlags {
        self.flags
    }

    /// Reads up to `buf.len()` bytes. Returns the host's count unchanged;
    /// 0 means end of file.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, FileError> {
        if !self.flags.readable {
            return Err(FileError::NotReadable);
        }
        Ok(self.file.read(buf)?)
    }

    /// Writes up to `buf.len()` bytes. A short count is the host's answer,
    /// not an error; retrying is the caller's decision.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, FileError> {
        if !self.flags.writable {
            return Err(FileError::NotWritable);
        }
        Ok(self.file.write(buf)?)
    }

    /// Writes the whole buffer or reports the host's failure.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), FileError> {
        if !self.flags.writable {
            return Err(FileError::NotWritable);
        }
        Ok(self.file.write_all(buf)?)
    }

    /// Moves the file position. Returns the new offset from the start.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, FileError> {
        Ok(self.file.seek(pos)?)
    }

    /// Current file position, as an offset from the start.
    pub fn tell(&mut self) -> Result<u64, FileError> {
        Ok(self.file.stream_position()?)
    }

    /// Flushes host-side write buffering for this handle.
    pub fn flush(&mut self) -> Result<(), FileError> {
        Ok(self.file.flush()?)
    }

    /// Releases the handle. Equivalent to dropping it; provided so programs
    /// can make the point of release explicit.
    pub fn close(self) -> Result<(), FileError> {
        drop(self.file);
        Ok(())
    }
}

impl Read for HostFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for HostFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for HostFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}
