//! Content classification and processing for Vasari.
//!
//! This crate holds the pieces that sit between an incoming upload and the
//! content store:
//!
//! - [`UploadPolicy`]: the configured extension map and size limit,
//!   validated eagerly at load time
//! - [`ContentClassifier`]: extension-based content-type detection and
//!   advisory size validation over seekable sources
//! - [`ImageNormalizer`]: bounded-dimension PNG re-encoding for image
//!   payloads
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use vasari_core::{ContentSource, ContentType};
//! use vasari_process::{ContentClassifier, UploadPolicy};
//!
//! # fn example() -> vasari_error::VasariResult<()> {
//! let policy = UploadPolicy::load()?;
//! let classifier = ContentClassifier::new(policy);
//!
//! let mut source = ContentSource::new("notes.md", Cursor::new(b"# notes".to_vec()));
//! assert_eq!(classifier.detect_content_type(&source)?, ContentType::Text);
//! assert!(classifier.validate_file_size(&mut source));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod image;
mod policy;

pub use vasari_error::{ClassifyError, ClassifyErrorKind};

pub use classifier::ContentClassifier;
pub use image::ImageNormalizer;
pub use policy::UploadPolicy;
