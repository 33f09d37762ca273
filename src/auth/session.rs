//! Server-side session handling: a cookie-addressed session store holding a
//! minimal projection of the authenticated user.

use serde::{Deserialize, Serialize};
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::Key;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::warn;

use super::AuthError;
use crate::config::AppConfig;
use crate::database::models::user::User;

const SESSION_USER_KEY: &str = "auth.user";

const SESSION_COOKIE_NAME: &str = "clientdesk.sid";

/// Minimal identity projection kept in the session. The password hash never
/// enters the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Transition to the authenticated state for this session.
pub async fn establish(session: &Session, user: &User) -> Result<(), AuthError> {
    session
        .insert(SESSION_USER_KEY, SessionUser::from(user))
        .await?;
    Ok(())
}

/// Current principal, or `None` for an anonymous session.
pub async fn current(session: &Session) -> Result<Option<SessionUser>, AuthError> {
    Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
}

/// Destroy the session unconditionally. Always transitions to anonymous;
/// store failures are logged, not surfaced.
pub async fn destroy(session: &Session) {
    if let Err(e) = session.flush().await {
        warn!("failed to destroy session: {}", e);
    }
}

/// Session middleware: in-process store, signed cookie, inactivity expiry.
/// Sessions are lazy: nothing is persisted until a value is inserted.
pub fn layer(config: &AppConfig) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let store = MemoryStore::default();
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        // TLS termination happens upstream of this service.
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::hours(2)))
        .with_signed(Key::derive_from(config.session_secret.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_carries_identity_but_not_the_hash() {
        let user = User {
            id: 42,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
        };
        let projected = SessionUser::from(&user);
        assert_eq!(projected.id, 42);
        assert_eq!(projected.username, "jdoe");
        assert_eq!(projected.email, "jdoe@example.com");

        let as_json = serde_json::to_value(&projected).unwrap();
        assert!(as_json.get("password_hash").is_none());
    }
}
