//! Readable stream trait definition.

use std::io::{self, Read};

/// Trait for byte streams returned by [`UriSource::open`](crate::UriSource::open).
///
/// A stream owns every transport resource behind it (file handle, socket,
/// connection). Dropping the stream releases them best-effort;
/// [`close`](ReadStream::close) does the same while reporting the first
/// teardown failure.
pub trait ReadStream: Read + Send + std::fmt::Debug {
    /// Release the transport resources behind this stream.
    ///
    /// Idempotent: closing an already-closed stream returns `Ok(())`.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
