//! Tests for core data types.

use std::io::Cursor;
use std::str::FromStr;
use strum::IntoEnumIterator;
use vasari_core::{ContentSource, ContentType, Page, Payload};

#[test]
fn test_content_type_round_trip() {
    for content_type in ContentType::iter() {
        let tag = content_type.as_str();
        assert_eq!(ContentType::from_str(tag).unwrap(), content_type);
        assert_eq!(content_type.to_string(), tag);
    }
}

#[test]
fn test_content_type_rejects_unknown_tag() {
    let err = ContentType::from_str("video").unwrap_err();
    assert!(err.contains("video"));
}

#[test]
fn test_source_extension_is_lowercased() {
    let source = ContentSource::new("Photo.JPEG", Cursor::new(Vec::<u8>::new()));
    assert_eq!(source.extension().as_deref(), Some(".jpeg"));
}

#[test]
fn test_source_without_extension() {
    let source = ContentSource::new("README", Cursor::new(Vec::<u8>::new()));
    assert_eq!(source.extension(), None);

    let unnamed = ContentSource::unnamed(Cursor::new(Vec::<u8>::new()));
    assert_eq!(unnamed.name(), None);
    assert_eq!(unnamed.extension(), None);
}

#[test]
fn test_page_offsets() {
    assert_eq!(Page::new(1, 25).offset(), 0);
    assert_eq!(Page::new(3, 10).offset(), 20);
    assert_eq!(Page::new(3, 10).limit(), 10);
    // Page 0 is treated as page 1 rather than underflowing.
    assert_eq!(Page::new(0, 10).offset(), 0);
}

#[test]
fn test_payload_len() {
    assert_eq!(Payload::Text("hello".to_string()).len(), 5);
    assert_eq!(Payload::Binary(vec![0u8; 16]).len(), 16);
    assert!(Payload::Text(String::new()).is_empty());
    assert_eq!(Payload::Text("abc".to_string()).as_bytes(), b"abc");
}
