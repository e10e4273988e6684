//! Top-level error wrapper types.

use crate::{ClassifyError, ConfigError, TransformError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum for the Vasari workspace. Each member
/// crate contributes its own typed error, discriminated here.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariError, ConfigError};
///
/// let cfg_err = ConfigError::new("unknown content type: video");
/// let err: VasariError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// Classification error
    #[from(ClassifyError)]
    Classify(ClassifyError),
    /// Transformer gateway error
    #[from(TransformError)]
    Transform(TransformError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, ClassifyError, ClassifyErrorKind};
///
/// fn classify() -> VasariResult<()> {
///     Err(ClassifyError::new(ClassifyErrorKind::MissingName))?
/// }
///
/// match classify() {
///     Ok(_) => println!("ok"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{VasariResult, ConfigError};
///
/// fn load() -> VasariResult<String> {
///     Err(ConfigError::new("no such file"))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
