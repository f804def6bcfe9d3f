pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, create_state};
pub use routes::{AppState, router};
