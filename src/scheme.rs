//! Scheme resolution: mapping a locator to its transport.

use std::io;

use crate::error::UnrecognizedScheme;
use crate::io::{ReadStream, WriteStream, file, http};
use crate::locator::Locator;

/// The closed set of transports a locator can resolve to.
///
/// Adding a scheme means adding a variant here and a matching arm in
/// [`Scheme::of`]; nothing is pluggable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Local filesystem access.
    File,
    /// HTTP or HTTPS access.
    Http,
}

impl Scheme {
    /// Resolve the transport for a locator.
    ///
    /// Pure and deterministic: only the scheme token is inspected. Bare
    /// paths and `file:` URLs resolve to [`Scheme::File`]; `http:` and
    /// `https:` resolve to [`Scheme::Http`] (the parser lowercases scheme
    /// tokens, so comparison is case-insensitive). Anything else fails.
    pub fn of(locator: &Locator) -> Result<Scheme, UnrecognizedScheme> {
        match locator {
            Locator::Path(_) => Ok(Scheme::File),
            Locator::Url(url) => match url.scheme() {
                "file" => Ok(Scheme::File),
                "http" | "https" => Ok(Scheme::Http),
                other => Err(UnrecognizedScheme {
                    scheme: other.to_string(),
                }),
            },
        }
    }

    /// Resolve like [`Scheme::of`], surfacing an unsupported scheme as an
    /// I/O error. At stream-acquisition time an unusable locator is an I/O
    /// problem, not an argument problem.
    pub(crate) fn of_io(locator: &Locator) -> io::Result<Scheme> {
        Scheme::of(locator).map_err(|e| io::Error::new(io::ErrorKind::Unsupported, e))
    }

    /// Open a readable byte stream for `locator` on this transport.
    pub fn open_read(self, locator: &Locator) -> io::Result<Box<dyn ReadStream>> {
        match self {
            Scheme::File => file::open_read(locator),
            Scheme::Http => http::open_read(locator),
        }
    }

    /// Open a writable byte stream for `locator` on this transport.
    pub fn open_write(self, locator: &Locator) -> io::Result<Box<dyn WriteStream>> {
        match self {
            Scheme::File => file::open_write(locator),
            Scheme::Http => http::open_write(locator),
        }
    }
}
