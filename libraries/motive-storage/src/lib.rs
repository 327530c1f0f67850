//! Motive Storage
//!
//! `SQLite` persistence for the Motive dashboard.
//!
//! The dashboard only persists a handful of keys (the past successes list
//! being the important one), so the schema is a single key/value table with
//! browser local storage semantics.
//!
//! # Example
//!
//! ```rust,no_run
//! use motive_storage::{create_pool, run_migrations, SqliteLocalStore};
//! use motive_core::LocalStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://motive.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteLocalStore::new(pool);
//! let wins = store.get_item("past-successes").await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod local_store;

pub use context::SqliteLocalStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before the pool is handed to a `SqliteLocalStore`.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://motive.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // One writer is plenty for a single-user dashboard, and it keeps
    // `sqlite::memory:` URLs pointing at a single database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
