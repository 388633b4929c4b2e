//! Byte-stream traits and the transport implementations behind them.
//!
//! This module provides:
//! - `ReadStream` / `WriteStream`: Traits for transport-owned byte streams
//! - `file`: Local filesystem transport
//! - `http`: HTTP/HTTPS transport

mod input;
mod output;

pub(crate) mod file;
pub(crate) mod http;

pub use http::{HttpReadStream, HttpWriteStream};
pub use input::ReadStream;
pub use output::WriteStream;
