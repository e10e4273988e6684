//! Transformer gateway error types.

/// Kinds of transform errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransformErrorKind {
    /// Prompt was empty or whitespace-only
    #[display("Prompt is empty")]
    EmptyPrompt,
    /// Provider failed to generate an image from text
    #[display("Image generation failed: {}", _0)]
    Generation(String),
    /// Provider failed to describe an image
    #[display("Image description failed: {}", _0)]
    Description(String),
}

/// Transform error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{TransformError, TransformErrorKind};
///
/// let err = TransformError::new(TransformErrorKind::Generation("quota exceeded".to_string()));
/// assert!(format!("{}", err).contains("quota exceeded"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transform Error: {} at line {} in {}", kind, line, file)]
pub struct TransformError {
    /// The kind of error that occurred
    pub kind: TransformErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransformError {
    /// Create a new transform error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
