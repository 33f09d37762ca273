use axum::extract::State;
use axum::response::{Json, Redirect};
use axum::Form;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::auth::{password, session};
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /login - login form contract for the rendering collaborator
pub async fn login_form() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "submit": "POST /login",
            "fields": {
                "email": "string (required)",
                "password": "string (required)"
            }
        }
    }))
}

/// POST /login - authenticate credentials and establish a session
///
/// An unknown email and a wrong password fail distinctly; both leave the
/// session anonymous.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, ApiError> {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let user = users::find_by_email(&state.pool, &form.email)
        .await?
        .ok_or_else(|| ApiError::not_found("no account for that email"))?;

    if !password::verify_password(&form.password, &user.password_hash)? {
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    session::establish(&session, &user).await?;
    tracing::info!(user = %user.username, "session established");

    Ok(Redirect::to("/clients"))
}
