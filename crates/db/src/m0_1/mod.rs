mod ingredient;
mod recipe;
mod recipe_ingredient;
mod recipe_tag;
mod tag;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0_1",
    vec_box![],
    vec_box![
        ingredient::CreateTable,
        ingredient::CreateNameUnitIdx,
        tag::CreateTable,
        recipe::CreateTable,
        recipe::CreateNameAuthorIdx,
        recipe_tag::CreateTable,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateRecipeIdx
    ]
);
