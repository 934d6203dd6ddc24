//! Unified error handling for the storefront client.
//!
//! Every user action funnels failures into a single `AppError`. The front end
//! logs the error and shows [`AppError::user_message`]: the server-supplied
//! message when one exists, a generic fallback otherwise. There is no retry
//! policy and no distinction between transient and permanent failures; every
//! failure is terminal for that user action.

use thiserror::Error;

use crate::backend::BackendError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::session::SessionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API operation failed.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// No stored session; the command requires a logged-in user.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Quantity input rejected before any request was issued.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] toychest_core::QuantityError),
}

impl AppError {
    /// The message shown to the user.
    ///
    /// Server-supplied messages pass through; internal error details do not.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => e.to_string(),
            Self::Backend(e) => e.user_message(),
            Self::Auth(e) => e.user_message(),
            Self::Session(_) => {
                "Failed to access the saved session. Try logging in again.".to_owned()
            }
            Self::NotLoggedIn => "Please log in first! Run `toychest login`.".to_owned(),
            Self::InvalidQuantity(_) => "Please enter a valid quantity (1 or more).".to_owned(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
