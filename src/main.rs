use tracing_subscriber::EnvFilter;

use clientdesk::auth::session;
use clientdesk::config::AppConfig;
use clientdesk::database;
use clientdesk::routes;
use clientdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SESSION_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clientdesk=debug,tower_http=info".into()),
        )
        .init();

    // Refuses to start on a missing DATABASE_URL or a missing/short SESSION_SECRET.
    let config = AppConfig::from_env()?;

    let pool = database::connect(&config).await?;
    sqlx::migrate!().run(&pool).await?;

    let app = routes::app(AppState { pool }).layer(session::layer(&config));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("clientdesk listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
