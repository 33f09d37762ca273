use sqlx::PgPool;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
