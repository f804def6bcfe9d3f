use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod cart;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub cart_command: foodgram_cart::Command,
    pub cart_query: foodgram_cart::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: foodgram_shared::State) -> Self {
        Self {
            config,
            cart_query: foodgram_cart::Query(state.read_db.clone()),
            pool: state.read_db.clone(),
            cart_command: foodgram_cart::Command(state),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/recipes/download_shopping_cart",
            get(cart::download),
        )
        .route(
            "/api/recipes/{id}/shopping_cart",
            post(cart::add).delete(cart::remove),
        )
        .with_state(app_state)
}
