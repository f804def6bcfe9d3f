use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient};
use foodgram_shared::recipe::{self, RecipeIngredientLine};
use sea_query::{Expr, ExprTrait, Order, Query as SeaQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use std::collections::HashMap;

#[derive(Clone)]
pub struct Query(pub SqlitePool);

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    name: String,
    author_id: String,
    cooking_time: i64,
}

#[derive(FromRow)]
struct LineRow {
    recipe_id: String,
    name: String,
    measurement_unit: String,
    amount: i64,
}

impl Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> foodgram_shared::Result<Option<recipe::Recipe>> {
        Ok(self.load_recipes(vec![id.into()]).await?.into_iter().next())
    }

    /// Loads recipes with their ingredient lines, ordered by id.
    ///
    /// Unknown ids are skipped.
    pub async fn load_recipes(
        &self,
        ids: Vec<String>,
    ) -> foodgram_shared::Result<Vec<recipe::Recipe>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = SeaQuery::select()
            .columns([Recipe::Id, Recipe::Name, Recipe::AuthorId, Recipe::CookingTime])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).is_in(ids.clone()))
            .order_by(Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let statement = SeaQuery::select()
            .column((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .column((Ingredient::Table, Ingredient::Name))
            .column((Ingredient::Table, Ingredient::MeasurementUnit))
            .column((RecipeIngredient::Table, RecipeIngredient::Amount))
            .from(RecipeIngredient::Table)
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId)).is_in(ids))
            .order_by((RecipeIngredient::Table, RecipeIngredient::RecipeId), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let lines = sqlx::query_as_with::<_, LineRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut lines_by_recipe: HashMap<String, Vec<RecipeIngredientLine>> = HashMap::new();
        for line in lines {
            lines_by_recipe
                .entry(line.recipe_id)
                .or_default()
                .push(RecipeIngredientLine::new(
                    line.name,
                    line.measurement_unit,
                    line.amount,
                ));
        }

        rows.into_iter()
            .map(|row| {
                let Ok(cooking_time) = u16::try_from(row.cooking_time) else {
                    foodgram_shared::integrity!(
                        "recipe {} has cooking time {}",
                        row.id,
                        row.cooking_time
                    );
                };

                Ok(recipe::Recipe {
                    ingredients: lines_by_recipe.remove(&row.id).unwrap_or_default(),
                    id: row.id,
                    name: row.name,
                    author_id: row.author_id,
                    cooking_time,
                })
            })
            .collect()
    }
}
