//! SQLite persistence for Vasari.
//!
//! This crate provides the diesel-backed implementation of the
//! [`vasari_interface::ContentStore`] trait: an append-only `content`
//! table plus an `interactions` engagement log, with ids assigned by the
//! database and embedded migrations run idempotently on connect.
//!
//! # Example
//!
//! ```rust,no_run
//! use vasari_database::SqliteContentStore;
//! use vasari_interface::ContentStore;
//! use vasari_core::{ContentType, NewContent, Payload};
//!
//! # async fn example() -> vasari_error::VasariResult<()> {
//! let store = SqliteContentStore::connect("content.db")?;
//!
//! let id = store
//!     .save_content(NewContent::new(
//!         ContentType::Text,
//!         "notes.md".to_string(),
//!         Payload::Text("# notes".to_string()),
//!         None,
//!     ))
//!     .await?;
//!
//! let records = store.get_content(None).await?;
//! assert_eq!(records.last().unwrap().id, id);
//! # Ok(())
//! # }
//! ```

mod connection;
mod content_store;
mod models;
pub mod schema;

pub use connection::{SqlitePool, build_pool, database_url};
pub use content_store::{MIGRATIONS, SqliteContentStore};
pub use models::{ContentRow, InteractionRow, NewContentRow, NewInteractionRow};

use vasari_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
