use foodgram_db::table::{Cart, CartRecipe};
use foodgram_shared::recipe::Recipe;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use std::ops::Deref;

#[derive(Clone)]
pub struct Command(pub foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    /// Puts a recipe in the user's cart, creating the cart on first use.
    pub async fn add(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Recipe> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let Some(recipe) = foodgram_recipe::Query(self.read_db.clone())
            .find(&recipe_id)
            .await?
        else {
            foodgram_shared::not_found!("recipe {recipe_id}");
        };

        let now = time::OffsetDateTime::now_utc().unix_timestamp();
        let mut tx = self.write_db.begin().await?;

        let statement = Query::insert()
            .into_table(Cart::Table)
            .columns([Cart::UserId, Cart::CreatedAt])
            .values_panic([user_id.to_owned().into(), now.into()])
            .on_conflict(OnConflict::column(Cart::UserId).do_nothing().to_owned())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::insert()
            .into_table(CartRecipe::Table)
            .columns([CartRecipe::UserId, CartRecipe::RecipeId, CartRecipe::AddedAt])
            .values_panic([
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([CartRecipe::UserId, CartRecipe::RecipeId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let inserted = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if inserted == 0 {
            foodgram_shared::user!("recipe {recipe_id} already in cart");
        }

        tx.commit().await?;

        tracing::info!(%user_id, %recipe_id, "recipe added to cart");

        Ok(recipe)
    }

    pub async fn remove(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let statement = Query::delete()
            .from_table(CartRecipe::Table)
            .and_where(Expr::col(CartRecipe::UserId).eq(&user_id))
            .and_where(Expr::col(CartRecipe::RecipeId).eq(&recipe_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let deleted = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .rows_affected();

        if deleted == 0 {
            foodgram_shared::user!("recipe {recipe_id} not in cart");
        }

        tracing::info!(%user_id, %recipe_id, "recipe removed from cart");

        Ok(())
    }
}
