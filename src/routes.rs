use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, put};
use axum::Router;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::handlers::protected::clients;
use crate::handlers::public::auth;
use crate::middleware::auth::require_login;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        // Protected client records
        .merge(client_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/new", get(clients::new_form))
        .route("/clients/:id/edit", get(clients::edit_form))
        .route("/clients/:id", put(clients::update).delete(clients::delete))
        .route_layer(middleware::from_fn(require_login))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "clientdesk",
            "version": version,
            "description": "Client record management web service",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "register": "GET/POST /register (public)",
                "login": "GET/POST /login (public)",
                "logout": "GET /logout (public)",
                "clients": "GET/POST /clients (session required)",
                "client_new": "GET /clients/new (session required)",
                "client_edit": "GET /clients/:id/edit (session required)",
                "client_update": "PUT /clients/:id (session required)",
                "client_delete": "DELETE /clients/:id (session required)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
