//! Wire types for the toy-store backend.
//!
//! Field names follow the backend's JSON: camelCase keys, `_id` for object
//! IDs, bare numbers for prices.

use serde::{Deserialize, Serialize};

use toychest_core::{Price, ProductId, Quantity, UserId};

/// Generic `{message}` acknowledgement body.
///
/// Mutation endpoints reply with this on success and on failure alike.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response body.
///
/// The backend reports success by including `token` and `userId`; a rejected
/// login carries only `message`. The HTTP status is not the signal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A catalog product. Server-owned; the client only displays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub in_stock: bool,
}

/// Cart snapshot: the server's authoritative item list.
///
/// An absent `items` field deserializes as an empty cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// One line of the cart. The wire ID field (`_id`) is the product ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id", alias = "productId")]
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    pub quantity: Quantity,
}

/// Catalog search filter; only set fields become query parameters.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub query: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub in_stock: bool,
}

impl ProductFilter {
    /// Query pairs for `/products/search`.
    ///
    /// Unset fields are omitted entirely, and `inStock=true` is sent only
    /// when the filter is on.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.amount().to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.amount().to_string()));
        }
        if self.in_stock {
            pairs.push(("inStock", "true".to_owned()));
        }
        pairs
    }
}

/// Body for `/cart/add` and `/cart/update` (identical shape).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineRequest<'a> {
    pub user_id: &'a UserId,
    pub product_id: &'a ProductId,
    pub quantity: Quantity,
}

/// Body for `/cart/remove`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartRemoveRequest<'a> {
    pub user_id: &'a UserId,
    pub product_id: &'a ProductId,
}

/// Body for `/orders`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest<'a> {
    pub user_id: &'a UserId,
}

/// `/analytics/sales` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: Price,
}

/// One `/analytics/popular-products` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PopularProduct {
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub count: u64,
}
