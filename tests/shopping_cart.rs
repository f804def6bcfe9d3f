use axum::http::{Method, StatusCode, header};
use temp_dir::TempDir;
use tower::ServiceExt;

mod helpers;

fn cart_uri(recipe_id: &str) -> String {
    format!("/api/recipes/{recipe_id}/shopping_cart")
}

const DOWNLOAD: &str = "/api/recipes/download_shopping_cart";

#[tokio::test]
async fn test_download_aggregates_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let cake = helpers::create_recipe(
        &app.state,
        "Cake",
        &[("Flour", "g", 200), ("Sugar", "g", 100)],
    )
    .await?;
    let omelette = helpers::create_recipe(
        &app.state,
        "Omelette",
        &[("Flour", "g", 300), ("Egg", "pcs", 2)],
    )
    .await?;

    for id in [&cake, &omelette] {
        let response = helpers::send(&app, Method::POST, &cart_uri(id), Some("john")).await?;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("john")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(
        helpers::body_string(response).await?,
        "Egg (pcs) — 2\nFlour (g) — 500\nSugar (g) — 100\n"
    );

    Ok(())
}

#[tokio::test]
async fn test_download_empty_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("john")).await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(helpers::body_string(response).await?, "");

    Ok(())
}

#[tokio::test]
async fn test_download_only_sees_own_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let soup = helpers::create_recipe(&app.state, "Soup", &[("Salt", "g", 5)]).await?;
    helpers::send(&app, Method::POST, &cart_uri(&soup), Some("john")).await?;

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("jane")).await?;
    assert_eq!(helpers::body_string(response).await?, "");

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("john")).await?;
    assert_eq!(helpers::body_string(response).await?, "Salt (g) — 5\n");

    Ok(())
}

#[tokio::test]
async fn test_add_returns_short_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let soup = helpers::create_recipe(&app.state, "Soup", &[("Salt", "g", 5)]).await?;

    let response = helpers::send(&app, Method::POST, &cart_uri(&soup), Some("john")).await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = serde_json::from_str(&helpers::body_string(response).await?)?;
    assert_eq!(body["id"], soup.as_str());
    assert_eq!(body["name"], "Soup");
    assert_eq!(body["cooking_time"], 25);

    let response = helpers::send(&app, Method::POST, &cart_uri(&soup), Some("john")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_str(&helpers::body_string(response).await?)?;
    assert!(body["detail"].as_str().unwrap().contains("already in cart"));

    Ok(())
}

#[tokio::test]
async fn test_add_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let response =
        helpers::send(&app, Method::POST, &cart_uri("01JUNKNOWN"), Some("john")).await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_remove_from_cart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let soup = helpers::create_recipe(&app.state, "Soup", &[("Salt", "g", 5)]).await?;
    helpers::send(&app, Method::POST, &cart_uri(&soup), Some("john")).await?;

    let response = helpers::send(&app, Method::DELETE, &cart_uri(&soup), Some("john")).await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = helpers::send(&app, Method::DELETE, &cart_uri(&soup), Some("john")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("john")).await?;
    assert_eq!(helpers::body_string(response).await?, "");

    Ok(())
}

#[tokio::test]
async fn test_cart_routes_require_token() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let response = helpers::send(&app, Method::GET, DOWNLOAD, None).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = helpers::send(&app, Method::POST, &cart_uri("any"), None).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .uri(DOWNLOAD)
                .header("authorization", "Bearer not-a-jwt")
                .body(axum::body::Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_download_corrupted_amount_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_test_app(&dir.child("db.sqlite3")).await?;

    let soup = helpers::create_recipe(&app.state, "Soup", &[("Salt", "g", 5)]).await?;
    helpers::send(&app, Method::POST, &cart_uri(&soup), Some("john")).await?;

    sqlx::query("UPDATE recipe_ingredient SET amount = -5 WHERE recipe_id = ?1")
        .bind(&soup)
        .execute(&app.state.write_db)
        .await?;

    let response = helpers::send(&app, Method::GET, DOWNLOAD, Some("john")).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
