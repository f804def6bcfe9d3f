#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use foodgram::{
    AppState,
    auth::Claims,
    config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig},
};
use foodgram_recipe::{CreateRecipeInput, IngredientAmountInput, IngredientInput};
use foodgram_shared::State;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::path::Path;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub state: State,
}

pub async fn setup_test_app(path: &Path) -> anyhow::Result<TestApp> {
    let url = format!("sqlite:{}", path.display());
    let state = foodgram::create_state(&url, 2).await?;

    let mut conn = state.write_db.acquire().await?;
    foodgram_db::migrate(&mut conn).await?;
    drop(conn);

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        jwt: JwtConfig {
            secret: SECRET.to_owned(),
        },
        observability: ObservabilityConfig::default(),
    };

    Ok(TestApp {
        router: foodgram::router(AppState::new(config, state.clone())),
        state,
    })
}

pub fn token(user_id: &str) -> String {
    let exp = time::OffsetDateTime::now_utc().unix_timestamp() + 3600;

    encode(
        &Header::default(),
        &Claims {
            sub: user_id.to_owned(),
            exp: exp as u64,
        },
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
) -> anyhow::Result<Response<Body>> {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(user_id) = user_id {
        request = request.header("authorization", format!("Bearer {}", token(user_id)));
    }

    Ok(app
        .router
        .clone()
        .oneshot(request.body(Body::empty())?)
        .await?)
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Creates a recipe from `(name, unit, amount)` lines, importing ingredients as needed.
pub async fn create_recipe(
    state: &State,
    name: &str,
    lines: &[(&str, &str, i64)],
) -> anyhow::Result<String> {
    let command = foodgram_recipe::Command(state.clone());

    command
        .import_ingredients(
            lines
                .iter()
                .map(|(name, unit, _)| IngredientInput {
                    name: name.to_string(),
                    measurement_unit: unit.to_string(),
                })
                .collect(),
        )
        .await?;

    let mut ingredients = vec![];
    for (name, unit, amount) in lines {
        let id = sqlx::query_scalar::<_, String>(
            "SELECT id FROM ingredient WHERE name = ?1 AND measurement_unit = ?2",
        )
        .bind(name)
        .bind(unit)
        .fetch_one(&state.write_db)
        .await?;

        ingredients.push(IngredientAmountInput {
            id,
            amount: *amount,
        });
    }

    let id = command
        .create_recipe(
            CreateRecipeInput {
                name: name.to_owned(),
                text: format!("how to cook {name}"),
                cooking_time: 25,
                ingredients,
                tags: vec![],
            },
            "author",
        )
        .await?;

    Ok(id)
}
