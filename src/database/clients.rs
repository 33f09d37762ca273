use serde::Deserialize;
use serde_json::Value;
use sqlx::postgres::PgArguments;
use sqlx::{FromRow, PgPool};
use thiserror::Error;
use tracing::debug;

use crate::database::models::client::{Client, ClientWithStatus};
use crate::database::DatabaseError;
use crate::filter::ClientFilter;

/// Client fields as submitted by the create/edit forms. The status selector
/// arrives as a raw string because an empty selection posts as `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientInput {
    pub full_name: String,
    pub phone_number: String,
    pub status_id: Option<String>,
}

/// Validated, normalized client fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClient {
    pub full_name: String,
    pub phone_number: String,
    pub status_id: Option<i64>,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid status reference: {0}")]
    InvalidStatusRef(String),
}

impl ClientInput {
    /// Presence checks plus status normalization: an absent or empty status
    /// reference becomes NULL, never an empty string.
    pub fn validate(&self) -> Result<NewClient, ValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("full_name"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::MissingField("phone_number"));
        }

        let status_id = match self.status_id.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ValidationError::InvalidStatusRef(raw.to_string()))?,
            ),
        };

        Ok(NewClient {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            status_id,
        })
    }
}

/// Run the composed listing query, each row annotated with its status name.
pub async fn list(
    pool: &PgPool,
    filter: &ClientFilter,
) -> Result<Vec<ClientWithStatus>, DatabaseError> {
    let sql = filter.to_sql();
    let mut query = sqlx::query_as::<_, ClientWithStatus>(&sql.query);
    for param in &sql.params {
        query = bind_value(query, param);
    }
    Ok(query.fetch_all(pool).await?)
}

/// Fetch exactly one client by id. Zero rows and multiple rows are distinct
/// failures; the single-row contract backs the edit form.
pub async fn fetch(pool: &PgPool, id: i64) -> Result<Client, DatabaseError> {
    let mut rows = sqlx::query_as::<_, Client>(
        "SELECT id, full_name, phone_number, status_id FROM clients WHERE id = $1",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    match rows.len() {
        0 => Err(DatabaseError::NotFound(format!("client {} not found", id))),
        1 => Ok(rows.remove(0)),
        n => Err(DatabaseError::ManyRows(n)),
    }
}

pub async fn create(pool: &PgPool, client: &NewClient) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO clients (full_name, phone_number, status_id) VALUES ($1, $2, $3)")
        .bind(&client.full_name)
        .bind(&client.phone_number)
        .bind(client.status_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Update the record matching the id. Zero affected rows is a successful
/// no-op, logged at debug.
pub async fn update(pool: &PgPool, id: i64, client: &NewClient) -> Result<(), DatabaseError> {
    let result = sqlx::query(
        "UPDATE clients SET full_name = $1, phone_number = $2, status_id = $3 WHERE id = $4",
    )
    .bind(&client.full_name)
    .bind(&client.phone_number)
    .bind(client.status_id)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        debug!(client_id = id, "update matched no rows");
    }
    Ok(())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), DatabaseError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        debug!(client_id = id, "delete matched no rows");
    }
    Ok(())
}

fn bind_value<'q, O>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    value: &'q Value,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match value {
        Value::Null => {
            let none: Option<String> = None;
            query.bind(none)
        }
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else if let Some(f) = n.as_f64() {
                query.bind(f)
            } else {
                query.bind(n.to_string())
            }
        }
        Value::String(s) => query.bind(s),
        other => query.bind(other.to_string()),
    }
}
