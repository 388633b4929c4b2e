//! HTTP/HTTPS transport.

use std::io::{self, Read, Write};
use std::mem;

use reqwest::blocking::{Client, Response};
use url::Url;

use super::{ReadStream, WriteStream};
use crate::locator::Locator;
use crate::teardown::Teardown;

fn request_url(locator: &Locator) -> io::Result<Url> {
    match locator.as_url() {
        Some(url) => Ok(url.clone()),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{locator}` is not an http(s) URL"),
        )),
    }
}

/// Fresh client per open call: separate stream acquisitions share no
/// connection state. Timeouts and retries are caller concerns, not
/// transport ones, so the client's default request timeout is disabled.
fn client() -> io::Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .map_err(io::Error::other)
}

/// Perform a GET against `locator` and return a stream over the response
/// body.
///
/// Connects and waits for the response before handing out a stream. Status
/// codes are not interpreted here: a non-2xx response still yields a stream
/// and the caller decides what the status means. If setup fails, the client
/// and any half-opened connection are released before the error propagates.
pub(crate) fn open_read(locator: &Locator) -> io::Result<Box<dyn ReadStream>> {
    let url = request_url(locator)?;
    let client = client()?;
    let response = client.get(url).send().map_err(io::Error::other)?;
    Ok(Box::new(HttpReadStream {
        response: Some(response),
        client: Some(client),
    }))
}

/// Open a writable PUT stream against `locator`.
pub(crate) fn open_write(locator: &Locator) -> io::Result<Box<dyn WriteStream>> {
    let url = request_url(locator)?;
    let client = client()?;
    Ok(Box::new(HttpWriteStream {
        url,
        client: Some(client),
        body: Vec::new(),
    }))
}

/// Readable stream over a GET response body.
#[derive(Debug)]
pub struct HttpReadStream {
    response: Option<Response>,
    client: Option<Client>,
}

impl Read for HttpReadStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.response.as_mut() {
            Some(response) => response.read(buf),
            None => Ok(0),
        }
    }
}

impl ReadStream for HttpReadStream {
    fn close(&mut self) -> io::Result<()> {
        let mut teardown = Teardown::new();
        if let Some(response) = self.response.take() {
            // Dropping the response closes the body stream and terminates
            // the connection (the disconnect step).
            teardown.run(|| {
                drop(response);
                Ok(())
            });
        }
        if let Some(client) = self.client.take() {
            teardown.run(|| {
                drop(client);
                Ok(())
            });
        }
        teardown.finish()
    }
}

impl Drop for HttpReadStream {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

/// Writable stream that buffers a PUT request body.
///
/// The request is transmitted when the stream is closed, so connect and DNS
/// failures for writes surface from [`close`](WriteStream::close). Close
/// then drains the response so the connection terminates cleanly, and
/// finally releases the client. The release step runs even when an earlier
/// step failed, and the first failure is the one reported.
#[derive(Debug)]
pub struct HttpWriteStream {
    url: Url,
    client: Option<Client>,
    body: Vec<u8>,
}

impl Write for HttpWriteStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.client.is_none() {
            return Err(io::Error::other("stream is closed"));
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteStream for HttpWriteStream {
    fn close(&mut self) -> io::Result<()> {
        let Some(client) = self.client.take() else {
            return Ok(());
        };
        let body = mem::take(&mut self.body);
        let mut teardown = Teardown::new();
        match client.put(self.url.clone()).body(body).send() {
            Ok(mut response) => {
                // Drain whatever the server answered with so the connection
                // can terminate cleanly.
                teardown.run(|| io::copy(&mut response, &mut io::sink()).map(|_| ()));
            }
            Err(err) => teardown.record(io::Error::other(err)),
        }
        teardown.run(|| {
            drop(client);
            Ok(())
        });
        teardown.finish()
    }
}

impl Drop for HttpWriteStream {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
