use axum::extract::State;
use axum::response::{Json, Redirect};
use axum::Form;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::password;
use crate::database::users;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// GET /register - registration form contract for the rendering collaborator
pub async fn register_form() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "submit": "POST /register",
            "fields": {
                "username": "string (required)",
                "email": "string (required)",
                "password": "string (required)"
            }
        }
    }))
}

/// POST /register - create a user account
///
/// A collision on either email or username rejects the registration with a
/// conflict; the two checks are a single combined existence query.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, ApiError> {
    if form.username.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty()
    {
        return Err(ApiError::bad_request(
            "username, email and password are required",
        ));
    }

    if users::exists_with(&state.pool, &form.email, &form.username).await? {
        return Err(ApiError::conflict("username or email already taken"));
    }

    let password_hash = password::hash_password(&form.password)?;

    if let Err(e) = users::insert(&state.pool, &form.username, &form.email, &password_hash).await {
        tracing::error!("registration insert failed: {}", e);
        return Err(ApiError::internal_server_error("registration failed"));
    }

    tracing::info!(user = %form.username, "account registered");
    Ok(Redirect::to("/login"))
}
