use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;

use crate::database::clients::{self, ClientInput};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /clients - create a client record
///
/// On success redirects to the listing; a store failure surfaces its message
/// and performs no redirect.
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<ClientInput>,
) -> Result<Redirect, ApiError> {
    let client = input.validate()?;
    clients::create(&state.pool, &client).await?;
    Ok(Redirect::to("/clients"))
}

/// PUT /clients/:id - update a client record
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(input): Form<ClientInput>,
) -> Result<Redirect, ApiError> {
    let client = input.validate()?;
    clients::update(&state.pool, id, &client).await?;
    Ok(Redirect::to("/clients"))
}

/// DELETE /clients/:id - delete a client record
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    clients::delete(&state.pool, id).await?;
    Ok(Redirect::to("/clients"))
}
