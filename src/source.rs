//! Readable resource handle.

use std::io::{self, Read};
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::LocatorError;
use crate::io::ReadStream;
use crate::locator::Locator;
use crate::scheme::Scheme;
use crate::text;

/// A readable handle over a resource locator.
///
/// Holds only the locator; the transport is resolved afresh on every
/// [`open`](UriSource::open) call, and each call produces an independent
/// stream sharing no state with earlier ones. The handle itself is immutable,
/// so it can be used from multiple threads at once.
///
/// ```rust,ignore
/// let source: UriSource = "https://example.com/data.txt".parse()?;
/// let mut stream = source.open()?;
/// let mut body = String::new();
/// stream.read_to_string(&mut body)?;
/// stream.close()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriSource {
    locator: Locator,
}

impl UriSource {
    /// Create a handle over a locator. The scheme is not validated here;
    /// an unsupported one fails at open time.
    pub fn new(locator: impl Into<Locator>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    /// The locator this handle reads from.
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Open a fresh readable byte stream.
    ///
    /// Resolves the transport, then opens with transport semantics: local
    /// file open for `file`/bare paths, GET for `http(s)`. An unsupported
    /// scheme surfaces as [`io::ErrorKind::Unsupported`].
    ///
    /// Ownership of the stream transfers to the caller, who is responsible
    /// for closing it on every path.
    pub fn open(&self) -> io::Result<Box<dyn ReadStream>> {
        Scheme::of_io(&self.locator)?.open_read(&self.locator)
    }

    /// Open a character stream yielding UTF-8.
    ///
    /// A byte-order mark in the leading bytes picks the encoding;
    /// `default_encoding` applies when none is found. Dropping the reader
    /// releases the transport behind it.
    pub fn reader(
        &self,
        default_encoding: &'static Encoding,
    ) -> io::Result<Box<dyn Read + Send>> {
        let stream = self.open()?;
        Ok(Box::new(text::decode(stream, default_encoding)))
    }
}

impl FromStr for UriSource {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            locator: Locator::parse(s)?,
        })
    }
}

impl From<Locator> for UriSource {
    fn from(locator: Locator) -> Self {
        Self::new(locator)
    }
}
