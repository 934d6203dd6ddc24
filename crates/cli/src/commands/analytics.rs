//! Analytics commands: sales summary and popular products.
//!
//! # Usage
//!
//! ```bash
//! toychest sales
//! toychest popular
//! ```

use toychest_storefront::backend::BackendClient;
use toychest_storefront::error::AppError;
use toychest_storefront::session::SessionStore;
use toychest_storefront::views::{SalesView, render_popular};

/// Show total revenue.
pub async fn sales(backend: &BackendClient, sessions: &SessionStore) -> Result<(), AppError> {
    sessions.require_user()?;

    let summary = backend.sales_summary().await?;
    println!("{}", SalesView::from(&summary));
    Ok(())
}

/// Show the most ordered products.
pub async fn popular(backend: &BackendClient, sessions: &SessionStore) -> Result<(), AppError> {
    sessions.require_user()?;

    let products = backend.popular_products().await?;
    println!("{}", render_popular(&products));
    Ok(())
}
