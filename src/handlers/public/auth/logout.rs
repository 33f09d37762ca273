use axum::response::Redirect;
use tower_sessions::Session;

use crate::auth::session;

/// GET /logout - destroy the session
///
/// Always lands in the anonymous state, whether or not a session existed.
pub async fn logout(session: Session) -> Redirect {
    session::destroy(&session).await;
    Redirect::to("/login")
}
