use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::error;

use crate::auth::{session, SessionUser};

/// Authenticated principal threaded into request extensions for handlers.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub SessionUser);

/// Access guard for protected routes: anonymous sessions are redirected to
/// the login entry point and the request is not processed further. The
/// authenticated path passes through unchanged.
pub async fn require_login(session: Session, mut request: Request, next: Next) -> Response {
    let user = match session::current(&session).await {
        Ok(user) => user,
        Err(e) => {
            // An unreadable session is indistinguishable from no session.
            error!("failed to load session: {}", e);
            None
        }
    };

    match user {
        Some(user) => {
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
