use axum::extract::{Query, State};
use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};

use crate::database::{clients, statuses};
use crate::error::ApiError;
use crate::filter::{ClientFilter, ListParams};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// GET /clients - list client records with optional filters and sorting
///
/// Query params: `search`, `status`, `phone`, `sort_by`, `sort_order`. The
/// status choices are read on every listing regardless of active filters, and
/// that read fails independently of the main query.
pub async fn list(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let filter = ClientFilter::from_params(&params)?;
    let records = clients::list(&state.pool, &filter).await?;
    let statuses = statuses::list(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "clients": records,
            "statuses": statuses,
            "filters": params,
            "user": user
        }
    })))
}
