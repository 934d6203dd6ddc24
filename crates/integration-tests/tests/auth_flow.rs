//! Integration tests for registration and login.
//!
//! These tests require a reachable toy-store backend. Set
//! `TOYCHEST_BACKEND_URL` to a test deployment and run with `-- --ignored`.

use secrecy::ExposeSecret;
use toychest_integration_tests::{TestContext, unique_email};
use toychest_storefront::services::auth::{AuthError, AuthService};

const PASSWORD: &str = "toychest-test-pw";

#[tokio::test]
#[ignore = "requires a reachable toy-store backend"]
async fn test_register_then_login_stores_session() {
    let ctx = TestContext::new("register-login");
    let email = unique_email();
    let auth = AuthService::new(&ctx.backend, &ctx.sessions);

    let message = auth
        .register("Test User", &email, PASSWORD)
        .await
        .expect("registration should succeed for a fresh email");
    assert!(!message.is_empty());

    // Nothing is stored until login succeeds.
    assert!(ctx.sessions.current().is_none());

    let session = auth
        .login(&email, PASSWORD)
        .await
        .expect("login should succeed with the registered credentials");
    assert!(!session.user_id().as_str().is_empty());
    assert!(!session.token().expose_secret().is_empty());

    // The session store now holds the same identity.
    let stored = ctx.sessions.current().expect("session should be persisted");
    assert_eq!(stored.user_id(), session.user_id());

    auth.logout().expect("logout should clear the session");
    assert!(ctx.sessions.current().is_none());
}

#[tokio::test]
#[ignore = "requires a reachable toy-store backend"]
async fn test_rejected_login_leaves_session_untouched() {
    let ctx = TestContext::new("bad-login");
    let email = unique_email();
    let auth = AuthService::new(&ctx.backend, &ctx.sessions);

    auth.register("Test User", &email, PASSWORD)
        .await
        .expect("registration should succeed for a fresh email");

    let err = auth
        .login(&email, "wrong-password")
        .await
        .expect_err("login with a wrong password should be rejected");
    assert!(matches!(err, AuthError::LoginRejected(_)));

    // The store was never written.
    assert!(ctx.sessions.current().is_none());
}

#[tokio::test]
#[ignore = "requires a reachable toy-store backend"]
async fn test_duplicate_registration_surfaces_server_message() {
    let ctx = TestContext::new("duplicate-register");
    let email = unique_email();
    let auth = AuthService::new(&ctx.backend, &ctx.sessions);

    auth.register("Test User", &email, PASSWORD)
        .await
        .expect("first registration should succeed");

    let err = auth
        .register("Test User", &email, PASSWORD)
        .await
        .expect_err("second registration with the same email should fail");

    // Whatever the backend said, the user sees words, not a status code dump.
    assert!(!err.user_message().is_empty());
}
