//! Catalog commands: list and search products.
//!
//! # Usage
//!
//! ```bash
//! toychest products
//! toychest search -q ball -c outdoor --min-price 5 --max-price 20 --in-stock
//! ```

use toychest_storefront::backend::BackendClient;
use toychest_storefront::backend::types::ProductFilter;
use toychest_storefront::error::AppError;
use toychest_storefront::session::SessionStore;
use toychest_storefront::views::render_catalog;

/// List the full catalog.
pub async fn products(backend: &BackendClient, sessions: &SessionStore) -> Result<(), AppError> {
    sessions.require_user()?;

    let products = backend.products().await?;
    println!("{}", render_catalog(&products));
    Ok(())
}

/// Search the catalog with the given filter.
pub async fn search(
    backend: &BackendClient,
    sessions: &SessionStore,
    filter: &ProductFilter,
) -> Result<(), AppError> {
    sessions.require_user()?;

    let products = backend.search_products(filter).await?;
    println!("{}", render_catalog(&products));
    Ok(())
}
