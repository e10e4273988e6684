//! Persisted content records.

use crate::{ContentType, Payload};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted unit of content plus its metadata and provenance.
///
/// Records are append-only: once saved they are never updated or deleted,
/// and `id` and `created_at` are assigned by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Unique id, monotonically assigned by the store on insert
    pub id: i64,
    /// Classification tag of the payload
    pub content_type: ContentType,
    /// Name/identifier of the original uploaded artifact
    pub original_path: String,
    /// The stored artifact itself
    pub payload: Payload,
    /// Free-form annotation (prompt used, generated caption, ...)
    pub metadata: Option<String>,
    /// Insert timestamp (UTC), never mutated
    pub created_at: NaiveDateTime,
}

/// Input for a new record; the store assigns `id` and `created_at`.
///
/// # Examples
///
/// ```
/// use vasari_core::{ContentType, NewContent, Payload};
///
/// let new = NewContent::new(
///     ContentType::Text,
///     "notes.md".to_string(),
///     Payload::Text("# notes".to_string()),
///     Some("Uploaded Text".to_string()),
/// );
/// assert_eq!(new.original_path, "notes.md");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct NewContent {
    /// Classification tag of the payload
    pub content_type: ContentType,
    /// Name/identifier of the original uploaded artifact
    pub original_path: String,
    /// The artifact to store
    pub payload: Payload,
    /// Free-form annotation
    pub metadata: Option<String>,
}
