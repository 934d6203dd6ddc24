//! Display models for terminal rendering.
//!
//! Each view derives what to show from the last fetched server snapshot;
//! nothing here is cached between fetches.

pub mod analytics;
pub mod cart;
pub mod products;

pub use analytics::{SalesView, render_popular};
pub use cart::{CartItemView, CartView};
pub use products::{ProductView, render_catalog};
