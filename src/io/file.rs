//! Local filesystem transport.

use std::fs::{File, OpenOptions};
use std::io;

use super::{ReadStream, WriteStream};
use crate::locator::Locator;

// A plain `File` already carries the right close semantics: dropping it
// releases the handle and there is nothing else to tear down.
impl ReadStream for File {}
impl WriteStream for File {}

/// Open the path named by `locator` for reading.
///
/// Missing or inaccessible paths surface the filesystem error untouched.
pub(crate) fn open_read(locator: &Locator) -> io::Result<Box<dyn ReadStream>> {
    let path = locator.to_file_path()?;
    let file = File::open(path)?;
    Ok(Box::new(file))
}

/// Open the path named by `locator` for writing, creating the file if absent
/// and truncating it otherwise.
///
/// The open itself may create the file on disk before any byte is written;
/// the stream never appends to pre-existing content.
pub(crate) fn open_write(locator: &Locator) -> io::Result<Box<dyn WriteStream>> {
    let path = locator.to_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    Ok(Box::new(file))
}
