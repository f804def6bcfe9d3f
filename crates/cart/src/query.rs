use foodgram_db::table::CartRecipe;
use sea_query::{Expr, ExprTrait, Order, Query as SeaQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::CartSnapshot;

#[derive(Clone)]
pub struct Query(pub SqlitePool);

impl Query {
    pub async fn contains(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<bool> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let statement = SeaQuery::select()
            .column(CartRecipe::RecipeId)
            .from(CartRecipe::Table)
            .and_where(Expr::col(CartRecipe::UserId).eq(&user_id))
            .and_where(Expr::col(CartRecipe::RecipeId).eq(&recipe_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .is_some())
    }

    pub async fn recipe_ids(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<Vec<String>> {
        let user_id = user_id.into();

        let statement = SeaQuery::select()
            .column(CartRecipe::RecipeId)
            .from(CartRecipe::Table)
            .and_where(Expr::col(CartRecipe::UserId).eq(&user_id))
            .order_by(CartRecipe::AddedAt, Order::Asc)
            .order_by(CartRecipe::RecipeId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Reads the user's cart with every recipe and its ingredient lines.
    ///
    /// A user without a cart gets an empty snapshot.
    pub async fn get_cart_recipes(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<CartSnapshot> {
        let user_id = user_id.into();
        let ids = self.recipe_ids(&user_id).await?;

        if ids.is_empty() {
            return Ok(CartSnapshot::empty(user_id));
        }

        let recipes = foodgram_recipe::Query(self.0.clone())
            .load_recipes(ids)
            .await?;

        Ok(CartSnapshot::new(user_id, recipes))
    }
}
