mod cart;
mod cart_recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![cart::CreateTable, cart_recipe::CreateTable]
);
