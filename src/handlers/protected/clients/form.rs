use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};

use crate::database::{clients, statuses};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// GET /clients/new - creation render context with status choices
pub async fn new_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Value>, ApiError> {
    let statuses = statuses::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "statuses": statuses,
            "user": user
        }
    })))
}

/// GET /clients/:id/edit - edit render context for one record
///
/// The record fetch holds a single-row contract: zero rows is not-found,
/// more than one is a distinct failure.
pub async fn edit_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let client = clients::fetch(&state.pool, id).await?;
    let statuses = statuses::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "client": client,
            "statuses": statuses,
            "user": user
        }
    })))
}
