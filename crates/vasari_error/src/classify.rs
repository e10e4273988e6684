//! Classification error types.

/// Kinds of classification errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClassifyErrorKind {
    /// Source has no usable file name or extension
    #[display("Content source has no file name with an extension")]
    MissingName,
    /// Extension matches no configured content type
    #[display("Unsupported file extension: {}", _0)]
    UnsupportedExtension(String),
    /// Source could not be read
    #[display("Failed to read content source: {}", _0)]
    UnreadableSource(String),
    /// Text payload is not valid UTF-8
    #[display("Text content is not valid UTF-8: {}", _0)]
    MalformedText(String),
    /// Image payload could not be decoded or re-encoded
    #[display("Malformed image: {}", _0)]
    MalformedImage(String),
}

/// Classification error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{ClassifyError, ClassifyErrorKind};
///
/// let err = ClassifyError::new(ClassifyErrorKind::UnsupportedExtension(".exe".to_string()));
/// assert!(format!("{}", err).contains(".exe"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Classification Error: {} at line {} in {}", kind, line, file)]
pub struct ClassifyError {
    /// The kind of error that occurred
    pub kind: ClassifyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClassifyError {
    /// Create a new classification error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClassifyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
