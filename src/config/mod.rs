use std::env;

use thiserror::Error;

/// The cookie signing key is derived from the session secret; 32 bytes is
/// the minimum the derivation accepts.
const MIN_SESSION_SECRET_BYTES: usize = 32;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),

    #[error("SESSION_SECRET must be at least {MIN_SESSION_SECRET_BYTES} bytes")]
    WeakSessionSecret,
}

/// Runtime configuration, resolved once at startup and threaded through
/// application state rather than read ambiently.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub session_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("PORT").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("SESSION_SECRET").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        database_url: Option<String>,
        max_connections: Option<String>,
        session_secret: Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match max_connections {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid("DATABASE_MAX_CONNECTIONS", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database_url = database_url.ok_or(ConfigError::Missing("DATABASE_URL"))?;

        // No insecure fallback: deployments must supply an explicit secret.
        let session_secret = session_secret.ok_or(ConfigError::Missing("SESSION_SECRET"))?;
        if session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigError::WeakSessionSecret);
        }

        Ok(Self {
            port,
            database_url,
            database_max_connections,
            session_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Option<String> {
        Some("0123456789abcdef0123456789abcdef".to_string())
    }

    fn db_url() -> Option<String> {
        Some("postgres://localhost/clientdesk".to_string())
    }

    #[test]
    fn defaults_apply_when_optional_vars_absent() {
        let config = AppConfig::from_vars(None, db_url(), None, secret()).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn explicit_port_overrides_default() {
        let config =
            AppConfig::from_vars(Some("8080".to_string()), db_url(), None, secret()).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn garbage_port_is_rejected() {
        let err = AppConfig::from_vars(Some("http".to_string()), db_url(), None, secret())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = AppConfig::from_vars(None, None, None, secret()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn missing_session_secret_refuses_startup() {
        let err = AppConfig::from_vars(None, db_url(), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SESSION_SECRET")));
    }

    #[test]
    fn short_session_secret_refuses_startup() {
        let err = AppConfig::from_vars(None, db_url(), None, Some("hunter2".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::WeakSessionSecret));
    }
}
