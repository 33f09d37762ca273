use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub status_id: Option<i64>,
}

/// Client row as returned by the listing query, with the status name
/// projected through the join (absent when the status reference is null).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientWithStatus {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub status_id: Option<i64>,
    pub status_name: Option<String>,
}
