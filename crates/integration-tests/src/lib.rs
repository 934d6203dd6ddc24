//! Integration tests for ToyChest.
//!
//! # Running Tests
//!
//! These tests talk to a live toy-store backend and are `#[ignore]`d by
//! default. Point `TOYCHEST_BACKEND_URL` at a test deployment, then:
//!
//! ```bash
//! cargo test -p toychest-integration-tests -- --ignored
//! ```
//!
//! Tests register their own throwaway accounts (unique email per run), so
//! they can run repeatedly against the same deployment.

use std::path::PathBuf;

use url::Url;
use uuid::Uuid;

use toychest_storefront::backend::BackendClient;
use toychest_storefront::config::StorefrontConfig;
use toychest_storefront::session::SessionStore;

/// Base URL for the backend under test (configurable via environment).
#[must_use]
pub fn backend_url() -> Url {
    let raw = std::env::var("TOYCHEST_BACKEND_URL")
        .unwrap_or_else(|_| "https://toy-store-backend.onrender.com".to_owned());
    Url::parse(&raw).expect("TOYCHEST_BACKEND_URL must be a valid URL")
}

/// A unique throwaway email for registration tests.
#[must_use]
pub fn unique_email() -> String {
    format!("toychest-test-{}@example.com", Uuid::new_v4())
}

/// Session file path that won't collide with a real session or other runs.
#[must_use]
pub fn temp_session_file(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join("toychest-integration-tests")
        .join(format!("{}-{name}.json", Uuid::new_v4()))
}

/// Test context: a backend client plus an isolated session store.
pub struct TestContext {
    pub config: StorefrontConfig,
    pub backend: BackendClient,
    pub sessions: SessionStore,
}

impl TestContext {
    /// Build a context against the configured backend with a throwaway
    /// session file.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let config = StorefrontConfig {
            backend_url: backend_url(),
            session_file: temp_session_file(name),
        };
        let backend = BackendClient::new(&config);
        let sessions = SessionStore::new(config.session_file.clone());

        Self {
            config,
            backend,
            sessions,
        }
    }
}
