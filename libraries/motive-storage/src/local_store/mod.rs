//! Key/value rows
//!
//! Values are opaque strings; callers serialize their own JSON. A row per key,
//! upserted on write.
//!
//! # Example
//!
//! ```rust,no_run
//! use motive_storage::local_store;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! local_store::set_item(pool, "past-successes", "[]").await?;
//! let value = local_store::get_item(pool, "past-successes").await?;
//! # Ok(())
//! # }
//! ```

use sqlx::{Row, SqlitePool};

use crate::error::Result;

/// Get the value stored under `key`
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn get_item(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT value FROM local_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.get::<String, _>("value")))
}

/// Store `value` under `key`, replacing any previous value
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn set_item(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO local_store (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete `key`
///
/// # Returns
///
/// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the key was absent
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn remove_item(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM local_store WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
