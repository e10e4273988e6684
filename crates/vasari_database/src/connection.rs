//! Database connection utilities.

use crate::DatabaseResult;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use vasari_error::{DatabaseError, DatabaseErrorKind};

/// Connection pool over a SQLite database.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Per-connection pragmas, applied as the pool hands connections out.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a connection pool for the given database URL.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub fn build_pool(database_url: &str) -> DatabaseResult<SqlitePool> {
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(ConnectionManager::new(database_url))
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
}

/// Read the database URL from the `DATABASE_URL` environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn database_url() -> DatabaseResult<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })
}
