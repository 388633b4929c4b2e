//! Writable stream trait definition.

use std::io::{self, Write};

/// Trait for byte streams returned by [`UriSink::open`](crate::UriSink::open).
///
/// A stream owns every transport resource behind it. [`close`](WriteStream::close)
/// completes the write (for HTTP, transmits the request) and then releases
/// the transport, reporting the first teardown failure; dropping an unclosed
/// stream runs the same chain best-effort.
pub trait WriteStream: Write + Send + std::fmt::Debug {
    /// Complete the write and release the transport resources behind this
    /// stream.
    ///
    /// Idempotent: closing an already-closed stream returns `Ok(())`.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
