//! Writable resource handle.

use std::io;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::LocatorError;
use crate::io::WriteStream;
use crate::locator::Locator;
use crate::scheme::Scheme;
use crate::text::EncodingWriter;

/// A writable handle over a resource locator.
///
/// Symmetric to [`UriSource`](crate::UriSource): holds only the locator,
/// resolves the transport afresh on every [`open`](UriSink::open) call, and
/// hands each stream to the caller with full ownership.
///
/// ```rust,ignore
/// let sink: UriSink = "file:///tmp/report.txt".parse()?;
/// let mut stream = sink.open()?;
/// stream.write_all(b"Hello, world!")?;
/// stream.close()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriSink {
    locator: Locator,
}

impl UriSink {
    /// Create a handle over a locator. The scheme is not validated here;
    /// an unsupported one fails at open time.
    pub fn new(locator: impl Into<Locator>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    /// The locator this handle writes to.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Open a fresh writable byte stream.
    ///
    /// Resolves the transport, then opens with transport semantics: local
    /// file open with create/truncate for `file`/bare paths (never append),
    /// PUT for `http(s)`. An unsupported scheme surfaces as
    /// [`io::ErrorKind::Unsupported`].
    pub fn open(&self) -> io::Result<Box<dyn WriteStream>> {
        Scheme::of_io(&self.locator)?.open_write(&self.locator)
    }

    /// Open a character stream that encodes UTF-8 input into `encoding` as
    /// it is written. No detection is involved on the write side.
    pub fn writer(&self, encoding: &'static Encoding) -> io::Result<EncodingWriter> {
        let stream = self.open()?;
        Ok(EncodingWriter::new(stream, encoding))
    }
}

impl FromStr for UriSink {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            locator: Locator::parse(s)?,
        })
    }
}

impl From<Locator> for UriSink {
    fn from(locator: Locator) -> Self {
        Self::new(locator)
    }
}
