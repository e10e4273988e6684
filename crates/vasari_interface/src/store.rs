//! Content store trait.

use async_trait::async_trait;
use vasari_core::{ContentRecord, NewContent, Page};
use vasari_error::VasariResult;

/// Append-only persistence for content records.
///
/// The store exclusively owns record storage and id assignment; callers
/// never choose ids. Records are created then read forever: no update or
/// delete operation exists.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Append one record, assign the next id, stamp `created_at`, and
    /// return the assigned id.
    ///
    /// Atomic with respect to id assignment: no two concurrent saves
    /// receive the same id, and a failed call leaves no partial record.
    async fn save_content(&self, new: NewContent) -> VasariResult<i64>;

    /// Return records ordered by `created_at` ascending, with `id`
    /// ascending as the stable tiebreak.
    ///
    /// `None` returns the full set. Re-querying after more inserts simply
    /// reflects the new total; no cursor state is retained between calls.
    async fn get_content(&self, page: Option<Page>) -> VasariResult<Vec<ContentRecord>>;

    /// Append an interaction (view, like, share, ...) against a stored
    /// record and return the interaction id.
    async fn record_interaction(&self, content_id: i64, kind: &str) -> VasariResult<i64>;
}
