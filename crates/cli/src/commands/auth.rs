//! Account commands: register, login, logout.
//!
//! # Usage
//!
//! ```bash
//! toychest register -n "Ada" -e ada@example.com -p s3cret
//! toychest login -e ada@example.com -p s3cret
//! toychest logout
//! ```

use toychest_storefront::backend::BackendClient;
use toychest_storefront::error::AppError;
use toychest_storefront::services::auth::AuthService;
use toychest_storefront::session::SessionStore;

use super::confirm;

/// Create a new account, then point at `login`.
pub async fn register(
    backend: &BackendClient,
    sessions: &SessionStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let auth = AuthService::new(backend, sessions);
    let message = auth.register(name, email, password).await?;

    println!("{message}");
    println!("Log in with `toychest login -e {email} -p <password>`.");
    Ok(())
}

/// Log in and store the session.
pub async fn login(
    backend: &BackendClient,
    sessions: &SessionStore,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let auth = AuthService::new(backend, sessions);
    auth.login(email, password).await?;

    println!("Login successful!");
    println!("Browse the catalog with `toychest products`.");
    Ok(())
}

/// Clear the stored session after confirmation.
pub fn logout(backend: &BackendClient, sessions: &SessionStore, yes: bool) -> Result<(), AppError> {
    if !yes && !confirm("Are you sure you want to log out?") {
        println!("Cancelled.");
        return Ok(());
    }

    let auth = AuthService::new(backend, sessions);
    auth.logout()?;

    println!("Logged out.");
    Ok(())
}
