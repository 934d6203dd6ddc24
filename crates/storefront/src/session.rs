//! Persistent session store.
//!
//! The session is the pair of authentication token and user identifier. It
//! lives in a small JSON file (the browser original kept the same two keys in
//! localStorage) and is passed around explicitly; nothing reads it
//! ambiently. There is no expiry tracking; a stored token is trusted until
//! the backend rejects it.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use toychest_core::UserId;

use crate::error::AppError;

/// Errors from reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session file I/O failed.
    #[error("session file I/O error: {0}")]
    Io(#[from] io::Error),

    /// Session file (de)serialization failed.
    #[error("session file serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The logged-in identity: auth token plus user ID.
#[derive(Clone)]
pub struct Session {
    token: SecretString,
    user_id: UserId,
}

impl Session {
    /// Create a session from its parts.
    #[must_use]
    pub const fn new(token: SecretString, user_id: UserId) -> Self {
        Self { token, user_id }
    }

    /// The stored authentication token.
    #[must_use]
    pub const fn token(&self) -> &SecretString {
        &self.token
    }

    /// The stored user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Implements `Debug` manually to redact the token.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// On-disk form of [`Session`]. Field names match the original storage keys.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    token: String,
    user_id: String,
}

/// File-backed session store.
///
/// Contract: [`save`](Self::save), [`clear`](Self::clear),
/// [`current`](Self::current). A missing or unreadable file reads as
/// logged-out.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current session, if any.
    ///
    /// A missing file means "not logged in". A corrupt or unreadable file is
    /// treated the same, after a warning.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Some(Session::new(
                SecretString::from(stored.token),
                UserId::new(stored.user_id),
            )),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt session file");
                None
            }
        }
    }

    /// Persist a new session, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, token: &SecretString, user_id: &UserId) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredSession {
            token: token.expose_secret().to_owned(),
            user_id: user_id.as_str().to_owned(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    /// Forget the stored session. Clearing an absent session is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The session, or the not-logged-in error.
    ///
    /// Every command except `register` and `login` calls this before doing
    /// anything else. This is the login gate of the original pages.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotLoggedIn`] when no session is stored.
    pub fn require_user(&self) -> Result<Session, AppError> {
        self.current().ok_or(AppError::NotLoggedIn)
    }
}
