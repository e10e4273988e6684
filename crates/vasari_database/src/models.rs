//! Row models for the content store tables.

use crate::schema::{content, interactions};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::str::FromStr;
use vasari_core::{ContentRecord, ContentType, NewContent, Payload};
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Row as stored in the `content` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = content)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContentRow {
    /// Assigned record id
    pub id: i64,
    /// Content type tag
    pub content_type: String,
    /// Name/identifier of the original artifact
    pub original_path: String,
    /// Raw payload bytes (text payloads as UTF-8)
    pub payload: Vec<u8>,
    /// Whether `payload` holds UTF-8 text
    pub payload_is_text: bool,
    /// Free-form annotation
    pub metadata: Option<String>,
    /// Insert timestamp
    pub created_at: NaiveDateTime,
}

/// Insertable content row; the database assigns the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = content)]
pub struct NewContentRow {
    /// Content type tag
    pub content_type: String,
    /// Name/identifier of the original artifact
    pub original_path: String,
    /// Raw payload bytes
    pub payload: Vec<u8>,
    /// Whether `payload` holds UTF-8 text
    pub payload_is_text: bool,
    /// Free-form annotation
    pub metadata: Option<String>,
    /// Insert timestamp
    pub created_at: NaiveDateTime,
}

impl NewContentRow {
    /// Flatten caller input into a row, stamping the insert time.
    pub fn from_new(new: NewContent, created_at: NaiveDateTime) -> Self {
        let payload_is_text = matches!(new.payload, Payload::Text(_));
        let payload = match new.payload {
            Payload::Text(text) => text.into_bytes(),
            Payload::Binary(bytes) => bytes,
        };

        Self {
            content_type: new.content_type.as_str().to_string(),
            original_path: new.original_path,
            payload,
            payload_is_text,
            metadata: new.metadata,
            created_at,
        }
    }
}

impl TryFrom<ContentRow> for ContentRecord {
    type Error = DatabaseError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let content_type = ContentType::from_str(&row.content_type)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Serialization(e)))?;

        let payload = if row.payload_is_text {
            let text = String::from_utf8(row.payload).map_err(|e| {
                DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                    "text payload of record {} is not UTF-8: {}",
                    row.id, e
                )))
            })?;
            Payload::Text(text)
        } else {
            Payload::Binary(row.payload)
        };

        Ok(ContentRecord {
            id: row.id,
            content_type,
            original_path: row.original_path,
            payload,
            metadata: row.metadata,
            created_at: row.created_at,
        })
    }
}

/// Row as stored in the `interactions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = interactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InteractionRow {
    /// Assigned interaction id
    pub id: i64,
    /// Id of the content record interacted with
    pub content_id: i64,
    /// Interaction kind (view, like, share, ...)
    pub interaction_type: String,
    /// Insert timestamp
    pub created_at: NaiveDateTime,
}

/// Insertable interaction row; the database assigns the id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = interactions)]
pub struct NewInteractionRow {
    /// Id of the content record interacted with
    pub content_id: i64,
    /// Interaction kind
    pub interaction_type: String,
    /// Insert timestamp
    pub created_at: NaiveDateTime,
}
