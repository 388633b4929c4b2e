//! Character-stream adapters over byte streams.
//!
//! The read side delegates to `encoding_rs_io`: a leading byte-order mark
//! picks the encoding, and the caller-supplied default applies when none is
//! found. The write side is a direct encode-on-write adapter with no
//! detection.

use std::fmt;
use std::io::{self, Read, Write};
use std::mem;

use encoding_rs::{CoderResult, Encoder, Encoding};
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::io::WriteStream;
use crate::teardown::Teardown;

/// Wrap a byte stream in a decoder that yields UTF-8.
///
/// Called exactly once per [`UriSource::reader`](crate::UriSource::reader)
/// invocation; the detection logic itself lives in `encoding_rs_io`.
pub(crate) fn decode<R: Read + Send + 'static>(
    stream: R,
    default_encoding: &'static Encoding,
) -> impl Read + Send + 'static {
    DecodeReaderBytesBuilder::new()
        .encoding(Some(default_encoding))
        .bom_override(true)
        .build(stream)
}

/// Encode-on-write character stream over a byte stream.
///
/// Input bytes must be UTF-8; they are encoded into the target encoding as
/// they arrive. A multi-byte sequence split across `write` calls is carried
/// over to the next call. Closing finishes the encoder and then closes the
/// underlying stream, reporting the first failure.
///
/// Per the Encoding Standard there is no encoder *into* UTF-16; requesting
/// it encodes as UTF-8, the encoding's designated output encoding.
pub struct EncodingWriter {
    inner: Box<dyn WriteStream>,
    encoder: Encoder,
    // Incomplete UTF-8 sequence carried between write calls (at most 3 bytes).
    pending: Vec<u8>,
    closed: bool,
}

impl fmt::Debug for EncodingWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingWriter")
            .field("inner", &self.inner)
            .field("encoding", &self.encoder.encoding().name())
            .field("pending", &self.pending)
            .field("closed", &self.closed)
            .finish()
    }
}

impl EncodingWriter {
    pub(crate) fn new(inner: Box<dyn WriteStream>, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            encoder: encoding.new_encoder(),
            pending: Vec::new(),
            closed: false,
        }
    }

    /// The name of the encoding actually produced.
    pub fn encoding_name(&self) -> &'static str {
        self.encoder.encoding().name()
    }

    fn invalid_utf8() -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            "input to an encoding writer must be valid UTF-8",
        )
    }

    fn encode_str(&mut self, mut text: &str) -> io::Result<()> {
        let mut out = [0u8; 4096];
        while !text.is_empty() {
            let (result, read, written, _) = self.encoder.encode_from_utf8(text, &mut out, false);
            self.inner.write_all(&out[..written])?;
            text = &text[read..];
            debug_assert!(matches!(
                result,
                CoderResult::InputEmpty | CoderResult::OutputFull
            ));
        }
        Ok(())
    }

    fn finish_encoder(&mut self) -> io::Result<()> {
        let mut out = [0u8; 64];
        loop {
            let (result, _, written, _) = self.encoder.encode_from_utf8("", &mut out, true);
            self.inner.write_all(&out[..written])?;
            if matches!(result, CoderResult::InputEmpty) {
                return self.inner.flush();
            }
        }
    }
}

impl Write for EncodingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::other("stream is closed"));
        }
        let mut input = buf;

        // Complete a sequence split across the previous call.
        if !self.pending.is_empty() {
            loop {
                match std::str::from_utf8(&self.pending) {
                    Ok(_) => break,
                    Err(e) if e.error_len().is_some() => return Err(Self::invalid_utf8()),
                    Err(_) => {
                        let Some((&byte, rest)) = input.split_first() else {
                            // Still incomplete; everything was consumed.
                            return Ok(buf.len());
                        };
                        self.pending.push(byte);
                        input = rest;
                    }
                }
            }
            let done = mem::take(&mut self.pending);
            match std::str::from_utf8(&done) {
                Ok(text) => self.encode_str(text)?,
                Err(_) => return Err(Self::invalid_utf8()),
            }
        }

        match std::str::from_utf8(input) {
            Ok(text) => self.encode_str(text)?,
            Err(e) if e.error_len().is_some() => return Err(Self::invalid_utf8()),
            Err(e) => {
                let (valid, tail) = input.split_at(e.valid_up_to());
                if let Ok(text) = std::str::from_utf8(valid) {
                    self.encode_str(text)?;
                }
                self.pending.extend_from_slice(tail);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl WriteStream for EncodingWriter {
    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let mut teardown = Teardown::new();
        if !self.pending.is_empty() {
            self.pending.clear();
            teardown.record(io::Error::new(
                io::ErrorKind::InvalidData,
                "incomplete UTF-8 sequence at end of stream",
            ));
        }
        teardown.run(|| self.finish_encoder());
        teardown.run(|| self.inner.close());
        teardown.finish()
    }
}

impl Drop for EncodingWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
