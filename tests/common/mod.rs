#![allow(dead_code)]

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use clientdesk::auth::session;
use clientdesk::config::AppConfig;
use clientdesk::routes;
use clientdesk::state::AppState;

fn test_config(database_url: String) -> AppConfig {
    AppConfig {
        port: 0,
        database_url,
        database_max_connections: 2,
        session_secret: "an-integration-test-secret-of-32+b".to_string(),
    }
}

/// Build the full application stack with a lazily-connected pool, so routes
/// that never touch the database can be driven without one.
pub fn test_app() -> Router {
    let config = test_config("postgres://postgres@127.0.0.1/clientdesk_test".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_lazy(&config.database_url)
        .expect("lazy pool");

    routes::app(AppState { pool }).layer(session::layer(&config))
}

/// Build the application against the database named by DATABASE_URL, with
/// migrations applied. Backs the ignored end-to-end tests.
pub async fn live_app() -> anyhow::Result<Router> {
    let config = test_config(std::env::var("DATABASE_URL")?);

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    Ok(routes::app(AppState { pool }).layer(session::layer(&config)))
}
