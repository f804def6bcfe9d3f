use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Busy timeout, synchronous, cache size, foreign keys and temp store,
/// applied by sqlx to every connection it opens
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug))
}

/// Read-only pool used by queries and the shopping list download
///
/// The journal mode is persistent, so the WAL set by the write pool applies here too.
pub async fn create_read_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "read-only pool created");

    Ok(pool)
}

/// Single connection pool serializing every cart and recipe write
pub async fn create_write_pool(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::info!("write pool created");

    Ok(pool)
}

/// Pool without read/write split, created on demand for CLI commands
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = connect_options(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(max_connections, "pool created");

    Ok(pool)
}

/// Write pool first so the database file exists before the read-only pool opens it
pub async fn create_state(database_url: &str, max_connections: u32) -> Result<foodgram_shared::State> {
    let write_db = create_write_pool(database_url).await?;
    let read_db = create_read_pool(database_url, max_connections).await?;

    Ok(foodgram_shared::State { read_db, write_db })
}
