//! Vasari - content classification and persistence pipeline
//!
//! Vasari takes uploaded text and image files, classifies and validates
//! them, applies AI-backed transformations (text-to-image generation,
//! image-to-text description) through a pluggable gateway, and persists
//! everything in an append-only content store for paginated browsing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vasari::{
//!     ContentClassifier, ContentHub, ImageNormalizer, SqliteContentStore, UploadPolicy,
//! };
//!
//! # async fn example(transformer: impl vasari::ContentTransformer) -> vasari::VasariResult<()> {
//! let policy = UploadPolicy::load()?;
//! let hub = ContentHub::new(
//!     ContentClassifier::new(policy),
//!     ImageNormalizer::default(),
//!     SqliteContentStore::connect("content.db")?,
//!     transformer,
//! );
//!
//! let id = hub.generate_image("a lighthouse in fog").await?;
//! let gallery = hub.explore(None).await?;
//! assert_eq!(gallery.last().unwrap().id, id);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Vasari is organized as a workspace with focused crates:
//!
//! - `vasari_error` - Error types
//! - `vasari_core` - Core data types (ContentType, ContentRecord, ...)
//! - `vasari_interface` - ContentStore and ContentTransformer traits
//! - `vasari_process` - Upload policy, classification, image normalization
//! - `vasari_database` - SQLite persistence
//!
//! This crate (`vasari`) re-exports everything for convenience and adds
//! [`ContentHub`], the workflow layer a presentation front end drives.

mod hub;

pub use hub::{ContentHub, Described, UploadOutcome};

pub use vasari_core::{
    ContentRecord, ContentSource, ContentType, NewContent, Page, Payload, init_tracing,
};
pub use vasari_database::SqliteContentStore;
pub use vasari_error::{
    ClassifyError, ClassifyErrorKind, ConfigError, DatabaseError, DatabaseErrorKind,
    TransformError, TransformErrorKind, VasariError, VasariErrorKind, VasariResult,
};
pub use vasari_interface::{ContentStore, ContentTransformer};
pub use vasari_process::{ContentClassifier, ImageNormalizer, UploadPolicy};
