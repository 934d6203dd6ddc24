//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TOYCHEST_BACKEND_URL` - Base URL of the toy-store backend
//!   (default: `https://toy-store-backend.onrender.com`)
//! - `TOYCHEST_SESSION_FILE` - Path of the persisted session file
//!   (default: `$HOME/.toychest/session.json`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend deployment.
const DEFAULT_BACKEND_URL: &str = "https://toy-store-backend.onrender.com";

const SESSION_DIR: &str = ".toychest";
const SESSION_FILE: &str = "session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the toy-store backend
    pub backend_url: Url,
    /// Path of the persisted session file
    pub session_file: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the backend URL does not parse, or if no
    /// session file location can be determined (no override and no `$HOME`).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend_url = parse_backend_url(&get_env_or_default(
            "TOYCHEST_BACKEND_URL",
            DEFAULT_BACKEND_URL,
        ))?;

        let session_file = match get_optional_env("TOYCHEST_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_session_file()?,
        };

        Ok(Self {
            backend_url,
            session_file,
        })
    }
}

/// Parse and validate the backend base URL.
fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("TOYCHEST_BACKEND_URL".to_owned(), e.to_string()))
}

/// Session file under the user's home directory.
fn default_session_file() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .map_err(|_| ConfigError::MissingEnvVar("HOME or TOYCHEST_SESSION_FILE".to_owned()))?;
    Ok(PathBuf::from(home).join(SESSION_DIR).join(SESSION_FILE))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_url_valid() {
        let url = parse_backend_url("http://localhost:9664/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9664/api");
    }

    #[test]
    fn test_parse_backend_url_default() {
        assert!(parse_backend_url(DEFAULT_BACKEND_URL).is_ok());
    }

    #[test]
    fn test_parse_backend_url_invalid() {
        let err = parse_backend_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TOYCHEST_BACKEND_URL"));
    }
}
