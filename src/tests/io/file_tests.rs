//! Tests for the local file transport.

use std::fs;
use std::io::{ErrorKind, Read, Write};

use crate::{ReadStream, UriSink, UriSource, WriteStream};

#[test]
fn write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.txt");

    let sink = UriSink::new(path.clone());
    let mut out = sink.open().unwrap();
    out.write_all(b"Hello, world!").unwrap();
    out.close().unwrap();

    let source = UriSource::new(path);
    let mut input = source.open().unwrap();
    let mut body = String::new();
    input.read_to_string(&mut body).unwrap();
    input.close().unwrap();

    assert_eq!(body, "Hello, world!");
}

#[test]
fn write_open_truncates_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncate.txt");
    fs::write(&path, "OLD").unwrap();

    let sink = UriSink::new(path.clone());
    let mut out = sink.open().unwrap();
    out.write_all(b"NEW").unwrap();
    out.close().unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"NEW".to_vec());
}

#[test]
fn write_open_creates_the_file_before_any_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("created.txt");

    let sink = UriSink::new(path.clone());
    let out = sink.open().unwrap();
    assert!(path.exists());
    drop(out);

    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn missing_file_surfaces_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let source = UriSource::new(dir.path().join("absent.txt"));
    let err = source.open().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn file_url_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("via-url.txt");
    let url = url::Url::from_file_path(&path).unwrap();

    let sink: UriSink = url.as_str().parse().unwrap();
    let mut out = sink.open().unwrap();
    out.write_all(b"Hello, world!").unwrap();
    out.close().unwrap();

    let source: UriSource = url.as_str().parse().unwrap();
    let mut input = source.open().unwrap();
    let mut body = String::new();
    input.read_to_string(&mut body).unwrap();

    assert_eq!(body, "Hello, world!");
}

#[test]
fn independent_opens_do_not_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.txt");
    fs::write(&path, "abcdef").unwrap();

    let source = UriSource::new(path);
    let mut a = source.open().unwrap();
    let mut b = source.open().unwrap();

    let mut buf_a = [0u8; 3];
    let mut buf_b = [0u8; 3];
    a.read_exact(&mut buf_a).unwrap();
    b.read_exact(&mut buf_b).unwrap();

    assert_eq!(&buf_a, b"abc");
    assert_eq!(&buf_b, b"abc");
}
