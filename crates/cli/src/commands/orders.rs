//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! toychest checkout
//! ```

use toychest_storefront::backend::BackendClient;
use toychest_storefront::error::AppError;
use toychest_storefront::session::SessionStore;

/// Place an order for everything in the cart.
pub async fn checkout(backend: &BackendClient, sessions: &SessionStore) -> Result<(), AppError> {
    let session = sessions.require_user()?;

    let ack = backend.checkout(session.user_id()).await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "Checkout successful! Your order has been placed.".to_owned())
    );
    println!("Back to the catalog: `toychest products`.");
    Ok(())
}
