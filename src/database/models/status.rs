use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status lookup row. Read-only for this service; seeded by migration.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientStatus {
    pub id: i64,
    pub name: String,
}
