//! Resource locators: parsed URI or bare filesystem path.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::error::LocatorError;

/// A parsed resource locator.
///
/// Text with a scheme token (`https://example.com/data.txt`,
/// `file:///tmp/out.bin`) parses into [`Locator::Url`]; schemeless text is a
/// local filesystem path and parses into [`Locator::Path`]. The value is
/// immutable; handles built on it resolve their transport afresh on every
/// open call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// An absolute URI. The scheme is normalized to lowercase by the parser.
    Url(Url),
    /// Schemeless text, interpreted as a local filesystem path.
    Path(PathBuf),
}

impl Locator {
    /// Parse text into a locator.
    ///
    /// Empty or all-whitespace text is rejected before parsing, and text
    /// that carries a scheme but is not a well-formed URI fails with
    /// [`LocatorError::Malformed`].
    pub fn parse(text: &str) -> Result<Self, LocatorError> {
        if text.trim().is_empty() {
            return Err(LocatorError::Empty);
        }
        match Url::parse(text) {
            // Single-letter schemes are Windows drive letters (`C:\data`),
            // not URI schemes.
            Ok(url) if url.scheme().len() == 1 => Ok(Locator::Path(PathBuf::from(text))),
            Ok(url) => Ok(Locator::Url(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Locator::Path(PathBuf::from(text))),
            Err(source) => Err(LocatorError::Malformed {
                text: text.to_string(),
                source,
            }),
        }
    }

    /// The URL behind this locator, if it is one.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Locator::Url(url) => Some(url),
            Locator::Path(_) => None,
        }
    }

    /// Derive the local filesystem path for this locator.
    ///
    /// Bare paths are used verbatim; `file:` URLs go through the host
    /// platform's URL-to-path conversion. Fails for URLs that do not map to
    /// a local path (remote host, opaque path).
    pub fn to_file_path(&self) -> io::Result<PathBuf> {
        match self {
            Locator::Path(path) => Ok(path.clone()),
            Locator::Url(url) => url.to_file_path().map_err(|()| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("`{url}` does not name a local file path"),
                )
            }),
        }
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Url(url) => url.fmt(f),
            Locator::Path(path) => path.display().fmt(f),
        }
    }
}

impl From<Url> for Locator {
    fn from(url: Url) -> Self {
        Locator::Url(url)
    }
}

impl From<PathBuf> for Locator {
    fn from(path: PathBuf) -> Self {
        Locator::Path(path)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::Locator;

    impl Serialize for Locator {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Locator {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Locator::parse(&text).map_err(de::Error::custom)
        }
    }
}
