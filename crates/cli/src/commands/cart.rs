//! Cart commands.
//!
//! Every mutation re-fetches the cart and re-renders it; the displayed total
//! always comes from the fresh server snapshot, never from local bookkeeping.
//!
//! # Usage
//!
//! ```bash
//! toychest cart show
//! toychest cart add <product-id> -q 2
//! toychest cart update <product-id> -q 3
//! toychest cart remove <product-id>
//! ```

use toychest_core::{ProductId, Quantity};
use toychest_storefront::backend::BackendClient;
use toychest_storefront::error::AppError;
use toychest_storefront::session::{Session, SessionStore};
use toychest_storefront::views::CartView;

use super::confirm;

/// Show the cart and its total.
pub async fn show(backend: &BackendClient, sessions: &SessionStore) -> Result<(), AppError> {
    let session = sessions.require_user()?;
    render_current(backend, &session).await
}

/// Add a product to the cart, then re-render it.
pub async fn add(
    backend: &BackendClient,
    sessions: &SessionStore,
    product_id: &str,
    quantity: &str,
) -> Result<(), AppError> {
    let session = sessions.require_user()?;
    let quantity: Quantity = quantity.parse()?;
    let product_id = ProductId::from(product_id);

    let ack = backend
        .add_to_cart(session.user_id(), &product_id, quantity)
        .await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| format!("{quantity} item(s) added to cart!"))
    );

    render_current(backend, &session).await
}

/// Set the quantity of a product already in the cart, then re-render it.
pub async fn update(
    backend: &BackendClient,
    sessions: &SessionStore,
    product_id: &str,
    quantity: &str,
) -> Result<(), AppError> {
    let session = sessions.require_user()?;
    let quantity: Quantity = quantity.parse()?;
    let product_id = ProductId::from(product_id);

    let ack = backend
        .update_cart(session.user_id(), &product_id, quantity)
        .await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "Cart updated successfully!".to_owned())
    );

    render_current(backend, &session).await
}

/// Remove a product from the cart after confirmation, then re-render it.
pub async fn remove(
    backend: &BackendClient,
    sessions: &SessionStore,
    product_id: &str,
    yes: bool,
) -> Result<(), AppError> {
    let session = sessions.require_user()?;

    if !yes && !confirm("Are you sure you want to remove this item from the cart?") {
        println!("Cancelled.");
        return Ok(());
    }

    let product_id = ProductId::from(product_id);
    let ack = backend
        .remove_from_cart(session.user_id(), &product_id)
        .await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "Item removed from cart!".to_owned())
    );

    render_current(backend, &session).await
}

/// The full fetch-and-render cycle: read the authoritative snapshot and
/// display it.
async fn render_current(backend: &BackendClient, session: &Session) -> Result<(), AppError> {
    let cart = backend.cart(session.user_id()).await?;
    println!("{}", CartView::from(&cart));
    Ok(())
}
