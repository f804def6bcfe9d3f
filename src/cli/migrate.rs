use sqlx::{Sqlite, migrate::MigrateDatabase};

use crate::config::Config;

pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    if !Sqlite::database_exists(&config.database.url).await? {
        tracing::info!(url = %config.database.url, "database does not exist, creating");
        Sqlite::create_database(&config.database.url).await?;
    }

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrate(&mut conn).await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database if it exists and recreate it with migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    if Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!(url = %config.database.url, "dropping existing database");
        Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await
}
