use foodgram_recipe::{CreateRecipeInput, IngredientAmountInput, IngredientInput};
use foodgram_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrate(&mut conn).await?;

    Ok(State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

/// Imports the ingredients and returns their ids in input order.
#[allow(dead_code)]
pub async fn create_ingredients(
    cmd: &foodgram_recipe::Command,
    items: &[(&str, &str)],
) -> anyhow::Result<Vec<String>> {
    cmd.import_ingredients(
        items
            .iter()
            .map(|(name, unit)| IngredientInput {
                name: name.to_string(),
                measurement_unit: unit.to_string(),
            })
            .collect(),
    )
    .await?;

    let mut ids = vec![];
    for (name, unit) in items {
        let id = sqlx::query_scalar::<_, String>(
            "SELECT id FROM ingredient WHERE name = ?1 AND measurement_unit = ?2",
        )
        .bind(name)
        .bind(unit)
        .fetch_one(&cmd.read_db)
        .await?;
        ids.push(id);
    }

    Ok(ids)
}

#[allow(dead_code)]
pub fn recipe_input(name: &str, ingredients: Vec<(String, i64)>) -> CreateRecipeInput {
    CreateRecipeInput {
        name: name.to_owned(),
        text: format!("how to cook {name}"),
        cooking_time: 15,
        ingredients: ingredients
            .into_iter()
            .map(|(id, amount)| IngredientAmountInput { id, amount })
            .collect(),
        tags: vec![],
    }
}
