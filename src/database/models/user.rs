use sqlx::FromRow;

/// Account row. Not serializable: the password hash must never reach a
/// response body or the session store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
