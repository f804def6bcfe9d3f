//! Reference data imports: ingredients and tags

use std::path::Path;

use foodgram_recipe::{CreateTagInput, IngredientInput};

use crate::config::Config;

async fn command(config: &Config) -> anyhow::Result<foodgram_recipe::Command> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;

    Ok(foodgram_recipe::Command(foodgram_shared::State {
        read_db: pool.clone(),
        write_db: pool,
    }))
}

/// Load a JSON array of `{"name", "measurement_unit"}` into the ingredient table
pub async fn import_ingredients(config: &Config, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)?;
    let input: Vec<IngredientInput> = serde_json::from_str(&content)?;
    let total = input.len();

    let command = command(config).await?;
    let created = command.import_ingredients(input).await?;
    command.write_db.close().await;

    tracing::info!(total, created, file = %file.display(), "ingredients imported");

    Ok(())
}

/// Load a JSON array of `{"name", "slug"}` into the tag table
pub async fn import_tags(config: &Config, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)?;
    let input: Vec<CreateTagInput> = serde_json::from_str(&content)?;
    let total = input.len();

    let command = command(config).await?;
    let created = command.import_tags(input).await?;
    command.write_db.close().await;

    tracing::info!(total, created, file = %file.display(), "tags imported");

    Ok(())
}
