mod catalog;
mod migrate;
mod server;

pub use catalog::{import_ingredients, import_tags};
pub use migrate::{migrate, reset};
pub use server::serve;
