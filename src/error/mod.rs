//! Error types for locator parsing and scheme resolution.
//!
//! This module provides:
//! - `LocatorError`: Failures constructing a [`Locator`](crate::Locator)
//!   from text
//! - `UnrecognizedScheme`: A syntactically valid locator whose scheme is
//!   outside the supported set
//!
//! Everything that happens after resolution (opening, reading, writing,
//! closing) reports plain `std::io::Error`.

use thiserror::Error;

/// Error constructing a [`Locator`](crate::Locator) from text.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The input was empty or all whitespace. A caller bug, not bad data.
    #[error("empty resource locator")]
    Empty,

    /// The input carried a scheme token but is not a well-formed URI.
    #[error("malformed resource locator `{text}`")]
    Malformed {
        /// The offending input text
        text: String,
        /// The underlying parse failure
        #[source]
        source: url::ParseError,
    },
}

/// A locator whose scheme is outside the supported set.
///
/// Resolution never validates eagerly: a handle over an `ftp:` locator
/// constructs fine and fails only when a stream is requested, at which point
/// this error is surfaced as `std::io::ErrorKind::Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized scheme `{scheme}`")]
pub struct UnrecognizedScheme {
    /// The lowercased scheme token that failed to resolve
    pub scheme: String,
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
