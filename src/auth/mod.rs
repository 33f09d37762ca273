use thiserror::Error;

pub mod password;
pub mod session;

pub use session::SessionUser;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}
