//! Authentication service.
//!
//! Orchestrates the backend auth endpoints and the local session store. The
//! backend owns credentials and token issuance; the client only stores what
//! it is given. There is no token refresh: a stored token lives until logout
//! or until the backend rejects it.

use secrecy::SecretString;
use thiserror::Error;
use tracing::info;

use crate::backend::types::LoginResponse;
use crate::backend::{BackendClient, BackendError};
use crate::session::{Session, SessionError, SessionStore};

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the login (no token in the response).
    #[error("login rejected: {}", .0.as_deref().unwrap_or("no message"))]
    LoginRejected(Option<String>),

    /// Backend request failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Session store failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl AuthError {
    /// The message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LoginRejected(Some(message)) => message.clone(),
            Self::LoginRejected(None) => "Login failed. Check your email and password.".to_owned(),
            Self::Backend(e) => e.user_message(),
            Self::Session(_) => "Failed to save the session. Try again.".to_owned(),
        }
    }
}

/// Authentication service.
pub struct AuthService<'a> {
    backend: &'a BackendClient,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(backend: &'a BackendClient, sessions: &'a SessionStore) -> Self {
        Self { backend, sessions }
    }

    /// Register a new account.
    ///
    /// The backend replies with a message only; the user logs in separately
    /// afterwards. Returns the message to show.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// registration.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let ack = self.backend.register(name, email, password).await?;
        Ok(ack
            .message
            .unwrap_or_else(|| "Registration successful! Please log in.".to_owned()))
    }

    /// Log in and persist the session.
    ///
    /// The session store is written only when the response carries a token;
    /// otherwise it is left untouched and the server's message surfaces as
    /// [`AuthError::LoginRejected`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend withholds a token,
    /// or the session cannot be saved.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self.backend.login(email, password).await?;
        let session = session_from_response(response)?;
        self.sessions.save(session.token(), session.user_id())?;
        info!(user_id = %session.user_id(), "Logged in");
        Ok(session)
    }

    /// Clear the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        info!("Logged out");
        Ok(())
    }
}

/// Map a login response to a session.
///
/// No token (or a token without a user ID) means the backend rejected the
/// login; the caller's session store stays untouched in that case.
fn session_from_response(response: LoginResponse) -> Result<Session, AuthError> {
    match (response.token, response.user_id) {
        (Some(token), Some(user_id)) => Ok(Session::new(SecretString::from(token), user_id)),
        (Some(_), None) | (None, _) => Err(AuthError::LoginRejected(response.message)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_login_response_with_token() {
        let session = session_from_response(LoginResponse {
            token: Some("tok-1".to_owned()),
            user_id: Some("u-1".into()),
            message: None,
        })
        .unwrap();
        assert_eq!(session.token().expose_secret(), "tok-1");
        assert_eq!(session.user_id().as_str(), "u-1");
    }

    #[test]
    fn test_login_response_without_token_is_rejection() {
        let err = session_from_response(LoginResponse {
            token: None,
            user_id: None,
            message: Some("Invalid credentials".to_owned()),
        })
        .unwrap_err();
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_login_response_token_without_user_id_is_rejection() {
        let err = session_from_response(LoginResponse {
            token: Some("tok-1".to_owned()),
            user_id: None,
            message: None,
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::LoginRejected(None)));
    }
}
