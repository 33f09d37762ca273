use sqlx::PgPool;

use crate::database::models::status::ClientStatus;
use crate::database::DatabaseError;

/// Filter-selection choices for the listing and form views, ordered by id.
pub async fn list(pool: &PgPool) -> Result<Vec<ClientStatus>, DatabaseError> {
    let statuses =
        sqlx::query_as::<_, ClientStatus>("SELECT id, name FROM client_statuses ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(statuses)
}
