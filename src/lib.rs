//! # uriio
//!
//! Uniform byte and text stream I/O over `file://` and `http(s)://`
//! resource locators.
//!
//! ## Overview
//!
//! uriio provides:
//! - **One open call per direction**: `UriSource::open` and `UriSink::open`
//!   hand out byte streams without the caller branching on resource type
//! - **Scheme resolution**: `file`, `http`, `https` (case-insensitive);
//!   schemeless text is a local path; anything else is rejected
//! - **Correct transport semantics**: create/truncate file writes, GET for
//!   remote reads, PUT for remote writes
//! - **Guaranteed teardown**: closing a stream releases every underlying
//!   resource (file handle, socket, connection), even under partial failure
//! - **Text convenience**: BOM-aware decoding to UTF-8 on the read side,
//!   encode-on-write on the write side
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::{Read, Write};
//!
//! use uriio::{UriSink, UriSource};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source: UriSource = "https://example.com/data.txt".parse()?;
//!     let mut input = source.open()?;
//!     let mut body = String::new();
//!     input.read_to_string(&mut body)?;
//!     input.close()?;
//!
//!     let sink: UriSink = "file:///tmp/data.txt".parse()?;
//!     let mut output = sink.open()?;
//!     output.write_all(body.as_bytes())?;
//!     output.close()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `serde` - `Locator` (de)serialization as its string form
//! - `miette` - Pretty error reporting for locator and scheme errors
//!
//! ## Stream ownership & close semantics
//!
//! Every open call allocates fresh transport state and transfers the stream
//! to the caller, who must close it on every path. Close runs an ordered
//! teardown chain: each step runs even when an earlier one failed, and the
//! first failure is the one reported. Dropping an unclosed stream runs the
//! same chain best-effort. For HTTP writes the buffered PUT is transmitted
//! during close, so connect failures for writes surface there.
//!
//! This layer is synchronous and blocking, interprets no HTTP status codes,
//! applies no timeouts and no retries, and never logs; callers wrap the
//! streams when they need any of those.

// Core modules
pub mod error;
pub mod io;
pub mod locator;
pub mod scheme;
pub mod sink;
pub mod source;
pub mod teardown;
pub mod text;

// Re-exports for convenience
pub use encoding_rs::Encoding;
pub use error::{LocatorError, UnrecognizedScheme};
pub use io::{HttpReadStream, HttpWriteStream, ReadStream, WriteStream};
pub use locator::Locator;
pub use scheme::Scheme;
pub use sink::UriSink;
pub use source::UriSource;
pub use teardown::Teardown;
pub use text::EncodingWriter;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::LocatorDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
