//! SQLite implementation of the content store.

use crate::connection::{SqlitePool, build_pool};
use crate::models::{ContentRow, InteractionRow, NewContentRow, NewInteractionRow};
use crate::schema::{content, interactions};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};
use vasari_core::{ContentRecord, NewContent, Page};
use vasari_error::{DatabaseError, DatabaseErrorKind, VasariResult};
use vasari_interface::ContentStore;

/// Embedded schema migrations, applied on connect.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// SQLite-backed append-only content store.
///
/// Ids are assigned by the database (AUTOINCREMENT), so they are unique
/// and strictly increasing in insertion order. Queries run on the blocking
/// thread pool; the store itself is cheap to clone and share.
#[derive(Clone)]
pub struct SqliteContentStore {
    pool: SqlitePool,
}

impl SqliteContentStore {
    /// Open the database at `database_url`, creating it if necessary, and
    /// ensure the backing schema exists.
    ///
    /// Setup is idempotent: already-applied migrations are skipped, so
    /// calling this on every startup is safe.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or a pending
    /// migration fails.
    #[instrument]
    pub fn connect(database_url: &str) -> VasariResult<Self> {
        let mut conn = SqliteConnection::establish(database_url).map_err(DatabaseError::from)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

        let pool = build_pool(database_url)?;

        info!(
            url = database_url,
            migrations = applied.len(),
            "content store ready"
        );
        Ok(Self { pool })
    }

    /// Open the database named by the `DATABASE_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or the connection fails.
    pub fn connect_from_env() -> VasariResult<Self> {
        Self::connect(&crate::connection::database_url()?)
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    #[instrument(skip(self, new), fields(content_type = %new.content_type, size = new.payload.len()))]
    async fn save_content(&self, new: NewContent) -> VasariResult<i64> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

            let row = NewContentRow::from_new(new, chrono::Utc::now().naive_utc());
            let inserted: ContentRow = diesel::insert_into(content::table)
                .values(&row)
                .get_result(&mut conn)
                .map_err(DatabaseError::from)?;

            debug!(id = inserted.id, "content saved");
            Ok(inserted.id)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }

    #[instrument(skip(self))]
    async fn get_content(&self, page: Option<Page>) -> VasariResult<Vec<ContentRecord>> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

            // Stable order: created_at has second resolution, so id breaks ties.
            let mut query = content::table
                .order((content::created_at.asc(), content::id.asc()))
                .into_boxed();

            if let Some(page) = page {
                query = query.limit(page.limit()).offset(page.offset());
            }

            let rows: Vec<ContentRow> = query.load(&mut conn).map_err(DatabaseError::from)?;

            rows.into_iter()
                .map(|row| ContentRecord::try_from(row).map_err(Into::into))
                .collect()
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }

    #[instrument(skip(self))]
    async fn record_interaction(&self, content_id: i64, kind: &str) -> VasariResult<i64> {
        let pool = self.pool.clone();
        let kind = kind.to_string();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

            let row = NewInteractionRow {
                content_id,
                interaction_type: kind,
                created_at: chrono::Utc::now().naive_utc(),
            };
            let inserted: InteractionRow = diesel::insert_into(interactions::table)
                .values(&row)
                .get_result(&mut conn)
                .map_err(DatabaseError::from)?;

            debug!(id = inserted.id, content_id, "interaction recorded");
            Ok(inserted.id)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}
