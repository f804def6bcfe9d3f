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

/// Creates a recipe from `(name, unit, amount)` lines, importing ingredients as needed.
#[allow(dead_code)]
pub async fn create_recipe(
    state: &State,
    name: &str,
    lines: &[(&str, &str, i64)],
) -> anyhow::Result<String> {
    let command = foodgram_recipe::Command(state.clone());

    command
        .import_ingredients(
            lines
                .iter()
                .map(|(name, unit, _)| IngredientInput {
                    name: name.to_string(),
                    measurement_unit: unit.to_string(),
                })
                .collect(),
        )
        .await?;

    let mut ingredients = vec![];
    for (name, unit, amount) in lines {
        let id = sqlx::query_scalar::<_, String>(
            "SELECT id FROM ingredient WHERE name = ?1 AND measurement_unit = ?2",
        )
        .bind(name)
        .bind(unit)
        .fetch_one(&state.read_db)
        .await?;

        ingredients.push(IngredientAmountInput {
            id,
            amount: *amount,
        });
    }

    let id = command
        .create_recipe(
            CreateRecipeInput {
                name: name.to_owned(),
                text: format!("how to cook {name}"),
                cooking_time: 20,
                ingredients,
                tags: vec![],
            },
            "author",
        )
        .await?;

    Ok(id)
}
