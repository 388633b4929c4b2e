//! Tests for locator parsing.

use std::path::PathBuf;

use crate::{Locator, LocatorError};

#[test]
fn bare_path_parses_as_path() {
    let loc = Locator::parse("data/input.txt").unwrap();
    assert_eq!(loc, Locator::Path(PathBuf::from("data/input.txt")));
}

#[test]
fn absolute_url_parses_as_url() {
    let loc = Locator::parse("https://example.com/data.txt").unwrap();
    let url = loc.as_url().expect("should parse as a URL");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.path(), "/data.txt");
}

#[test]
fn scheme_token_is_lowercased_by_the_parser() {
    let loc = Locator::parse("HTTPS://example.com/x").unwrap();
    assert_eq!(loc.as_url().unwrap().scheme(), "https");
}

#[test]
fn file_url_maps_to_a_local_path() {
    let path = std::env::temp_dir().join("uriio-locator-test.txt");
    let url = url::Url::from_file_path(&path).unwrap();

    let loc = Locator::parse(url.as_str()).unwrap();
    assert_eq!(loc.to_file_path().unwrap(), path);
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(Locator::parse(""), Err(LocatorError::Empty)));
    assert!(matches!(Locator::parse("   "), Err(LocatorError::Empty)));
}

#[test]
fn malformed_uri_is_rejected() {
    let err = Locator::parse("http://[not-a-host").unwrap_err();
    assert!(matches!(err, LocatorError::Malformed { .. }));
}

#[test]
fn single_letter_scheme_is_a_drive_path() {
    let loc = Locator::parse("C:/data/input.txt").unwrap();
    assert!(matches!(loc, Locator::Path(_)));
}

#[test]
fn display_round_trips() {
    for text in ["https://example.com/a.txt", "some/relative/path.txt"] {
        let loc = Locator::parse(text).unwrap();
        assert_eq!(loc.to_string(), text);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::Locator;

    #[test]
    fn locator_round_trips_through_serde() {
        let loc = Locator::parse("https://example.com/data.txt").unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"https://example.com/data.txt\"");

        let back: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }

    #[test]
    fn empty_text_fails_deserialization() {
        let result: Result<Locator, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
