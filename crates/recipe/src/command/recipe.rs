use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, Clone, Debug)]
pub struct IngredientAmountInput {
    pub id: String,
    #[validate(range(min = foodgram_shared::MIN_INGREDIENT_AMOUNT))]
    pub amount: i64,
}

#[derive(Validate, Serialize, Deserialize, Clone, Debug)]
pub struct CreateRecipeInput {
    #[validate(length(min = 1, max = foodgram_shared::MAX_LENGTH_TITLE))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(range(min = foodgram_shared::MIN_COOKING_TIME))]
    pub cooking_time: u16,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<IngredientAmountInput>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl super::Command {
    pub async fn create_recipe(
        &self,
        input: CreateRecipeInput,
        author_id: impl Into<String>,
    ) -> foodgram_shared::Result<String> {
        input.validate()?;

        let author_id = author_id.into();

        let mut seen = HashSet::new();
        for ingredient in input.ingredients.iter() {
            if !seen.insert(ingredient.id.as_str()) {
                foodgram_shared::user!("ingredient {} listed twice", ingredient.id);
            }
        }

        let mut tx = self.write_db.begin().await?;

        let statement = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Name).eq(&input.name))
            .and_where(Expr::col(Recipe::AuthorId).eq(&author_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let existing = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            foodgram_shared::user!("recipe {} already exists", input.name);
        }

        let ingredient_ids = input
            .ingredients
            .iter()
            .map(|i| i.id.to_owned())
            .collect::<Vec<_>>();

        let statement = Query::select()
            .column(Ingredient::Id)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).is_in(ingredient_ids))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let known = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .collect::<HashSet<_>>();

        if let Some(missing) = input.ingredients.iter().find(|i| !known.contains(&i.id)) {
            foodgram_shared::not_found!("ingredient {}", missing.id);
        }

        if !input.tags.is_empty() {
            let statement = Query::select()
                .column(Tag::Id)
                .from(Tag::Table)
                .and_where(Expr::col(Tag::Id).is_in(input.tags.clone()))
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let known = sqlx::query_scalar_with::<_, String, _>(&sql, values)
                .fetch_all(&mut *tx)
                .await?
                .into_iter()
                .collect::<HashSet<_>>();

            if let Some(missing) = input.tags.iter().find(|id| !known.contains(*id)) {
                foodgram_shared::not_found!("tag {missing}");
            }
        }

        let id = ulid::Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::Id,
                Recipe::AuthorId,
                Recipe::Name,
                Recipe::Text,
                Recipe::CookingTime,
                Recipe::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                author_id.into(),
                input.name.into(),
                input.text.into(),
                i64::from(input.cooking_time).into(),
                super::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let mut statement = Query::insert()
            .into_table(RecipeIngredient::Table)
            .columns([
                RecipeIngredient::Id,
                RecipeIngredient::RecipeId,
                RecipeIngredient::IngredientId,
                RecipeIngredient::Amount,
            ])
            .to_owned();

        for ingredient in input.ingredients {
            statement.values_panic([
                ulid::Ulid::new().to_string().into(),
                id.to_owned().into(),
                ingredient.id.into(),
                ingredient.amount.into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let mut tags = input.tags;
        tags.sort();
        tags.dedup();

        if !tags.is_empty() {
            let mut statement = Query::insert()
                .into_table(RecipeTag::Table)
                .columns([RecipeTag::RecipeId, RecipeTag::TagId])
                .to_owned();

            for tag_id in tags {
                statement.values_panic([id.to_owned().into(), tag_id.into()]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(recipe_id = %id, "recipe created");

        Ok(id)
    }
}
