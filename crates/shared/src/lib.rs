mod command;
pub mod recipe;

pub use command::*;

/// Smallest amount of an ingredient a recipe may ask for.
pub const MIN_INGREDIENT_AMOUNT: i64 = 1;

/// Smallest cooking time, in minutes.
pub const MIN_COOKING_TIME: u16 = 1;

pub const MAX_LENGTH_TITLE: u64 = 256;

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}
