use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use foodgram_cart::{CartAggregator, report};
use serde::Serialize;

use crate::{auth::AuthUser, error::AppError};

use super::AppState;

/// Short recipe representation returned after adding to the cart
#[derive(Serialize, Debug)]
pub struct RecipeShort {
    pub id: String,
    pub name: String,
    pub cooking_time: u16,
}

impl From<foodgram_shared::recipe::Recipe> for RecipeShort {
    fn from(recipe: foodgram_shared::recipe::Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            cooking_time: recipe.cooking_time,
        }
    }
}

/// POST /api/recipes/{id}/shopping_cart
pub async fn add(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.cart_command.add(id, user.id).await?;

    Ok((StatusCode::CREATED, Json(RecipeShort::from(recipe))))
}

/// DELETE /api/recipes/{id}/shopping_cart
pub async fn remove(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.cart_command.remove(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/recipes/download_shopping_cart
///
/// Always a 200 attachment, an empty cart yields an empty body.
pub async fn download(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.cart_query.get_cart_recipes(user.id).await?;
    let list = CartAggregator::shopping_list(&snapshot)?;
    let body = report::render(&list);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, report::CONTENT_TYPE.to_owned()),
            (header::CONTENT_DISPOSITION, report::content_disposition()),
        ],
        body,
    ))
}
