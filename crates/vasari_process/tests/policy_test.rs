//! Tests for upload policy loading and validation.

use std::collections::BTreeMap;
use std::io::Write;
use vasari_core::ContentType;
use vasari_error::VasariErrorKind;
use vasari_process::UploadPolicy;

#[test]
fn test_load_bundled_defaults() {
    let policy = UploadPolicy::load().unwrap();

    assert_eq!(policy.max_file_size(), 10 * 1024 * 1024);
    assert_eq!(policy.lookup(".md"), Some(ContentType::Text));
    assert_eq!(policy.lookup(".jpeg"), Some(ContentType::Image));
    assert_eq!(policy.lookup(".wav"), Some(ContentType::Audio));
    assert_eq!(policy.lookup(".exe"), None);
    assert_eq!(
        policy.extensions_for(ContentType::Audio),
        vec![".mp3".to_string(), ".wav".to_string()]
    );
}

#[test]
fn test_lookup_accepts_dotless_and_uppercase() {
    let policy = UploadPolicy::load().unwrap();
    assert_eq!(policy.lookup("PNG"), Some(ContentType::Image));
    assert_eq!(policy.lookup(".Md"), Some(ContentType::Text));
}

#[test]
fn test_rejects_overlapping_extensions() {
    let extensions = BTreeMap::from([
        ("image".to_string(), vec![".dat".to_string()]),
        ("text".to_string(), vec![".dat".to_string()]),
    ]);

    let err = UploadPolicy::new(1024, extensions).unwrap_err();
    assert!(matches!(err.kind(), VasariErrorKind::Config(_)));
    assert!(format!("{err}").contains(".dat"));
}

#[test]
fn test_rejects_unknown_content_type() {
    let extensions = BTreeMap::from([("video".to_string(), vec![".mp4".to_string()])]);

    let err = UploadPolicy::new(1024, extensions).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("video"));
    assert!(message.contains("text"));
}

#[test]
fn test_rejects_empty_extension_entry() {
    let extensions = BTreeMap::from([("text".to_string(), vec![".".to_string()])]);
    assert!(UploadPolicy::new(1024, extensions).is_err());
}

#[test]
fn test_normalizes_extension_entries() {
    let extensions = BTreeMap::from([(
        "text".to_string(),
        vec!["MD".to_string(), " .TXT ".to_string()],
    )]);

    let policy = UploadPolicy::new(1024, extensions).unwrap();
    assert_eq!(policy.lookup(".md"), Some(ContentType::Text));
    assert_eq!(policy.lookup(".txt"), Some(ContentType::Text));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "max_file_size = 2048").unwrap();
    writeln!(file, "[extensions]").unwrap();
    writeln!(file, "text = [\".log\"]").unwrap();
    file.flush().unwrap();

    let policy = UploadPolicy::from_path(file.path()).unwrap();
    assert_eq!(policy.max_file_size(), 2048);
    assert_eq!(policy.lookup(".log"), Some(ContentType::Text));
    assert_eq!(policy.lookup(".md"), None);
}
