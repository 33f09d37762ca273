use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::AppConfig;

pub mod clients;
pub mod models;
pub mod statuses;
pub mod users;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Expected a single row, found {0}")]
    ManyRows(usize),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the connection pool against the configured database.
pub async fn connect(config: &AppConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    info!("database pool ready");
    Ok(pool)
}
