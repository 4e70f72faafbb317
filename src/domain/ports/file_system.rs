//! FileSystem port - abstraction over file I/O operations
//!
//! Errors are plain `std::io::Error`s so callers can still match on
//! `ErrorKind::NotFound` after they cross the port. Reads return raw bytes;
//! decoding is the caller's job.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` (tests) - in-memory files
pub trait FileSystem {
    /// Read a whole file; the handle is closed before returning
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file content atomically, creating parent directories
    fn write_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        (**self).write_atomic(path, content)
    }
}
