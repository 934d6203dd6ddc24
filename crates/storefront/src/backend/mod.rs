//! Toy-store backend REST client.
//!
//! One method per backend resource. Each call issues a single HTTP request
//! and maps the result: 2xx parses the JSON body, non-2xx surfaces the JSON
//! `message` field, and transport failures bubble up as [`BackendError::Http`].
//! No retry, no timeout, no backoff; every failure is terminal for that
//! user action.

pub mod types;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use toychest_core::{ProductId, Quantity, UserId};

use crate::config::StorefrontConfig;
use types::{
    ApiMessage, Cart, CartLineRequest, CartRemoveRequest, CheckoutRequest, LoginRequest,
    LoginResponse, PopularProduct, Product, ProductFilter, RegisterRequest, SalesSummary,
};

/// Errors that can occur when talking to the toy-store backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (network failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error (HTTP {status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BackendError {
    /// The message shown to the user: the server's own words where it gave
    /// any, a generic fallback otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "Network error. Try again later.".to_owned(),
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Api {
                status,
                message: None,
            } => format!("The store returned an error (HTTP {status})."),
            Self::Parse(_) => "Received an invalid response from the store.".to_owned(),
        }
    }
}

/// Client for the toy-store backend REST API.
///
/// Cheaply cloneable; holds one `reqwest::Client` and the configured base
/// URL. Responses are read as text first so parse failures can log a body
/// excerpt.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let base_url = config.backend_url.as_str().trim_end_matches('/').to_owned();

        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// registration (duplicate email, missing fields).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<ApiMessage, BackendError> {
        self.post_json(
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }

    /// Log in with email and password.
    ///
    /// The response body is parsed regardless of HTTP status: the backend
    /// signals success by including a `token`, and reports bad credentials
    /// with a `message` body. The caller decides what a token-less response
    /// means.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| parse_error(e, &body))
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, BackendError> {
        self.get_json("/products", &[]).await
    }

    /// Search the catalog. Only the filter's set fields are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, filter))]
    pub async fn search_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<Product>, BackendError> {
        self.get_json("/products/search", &filter.query_pairs())
            .await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the user's cart snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn cart(&self, user_id: &UserId) -> Result<Cart, BackendError> {
        self.get_json(&format!("/cart/{user_id}"), &[]).await
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// mutation.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<ApiMessage, BackendError> {
        self.post_json(
            "/cart/add",
            &CartLineRequest {
                user_id,
                product_id,
                quantity,
            },
        )
        .await
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// mutation.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn update_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<ApiMessage, BackendError> {
        self.post_json(
            "/cart/update",
            &CartLineRequest {
                user_id,
                product_id,
                quantity,
            },
        )
        .await
    }

    /// Remove a product from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the
    /// mutation.
    #[instrument(skip(self), fields(user_id = %user_id, product_id = %product_id))]
    pub async fn remove_from_cart(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<ApiMessage, BackendError> {
        self.post_json(
            "/cart/remove",
            &CartRemoveRequest {
                user_id,
                product_id,
            },
        )
        .await
    }

    // =========================================================================
    // Orders & Analytics
    // =========================================================================

    /// Place an order for everything in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the order
    /// (e.g. empty cart).
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn checkout(&self, user_id: &UserId) -> Result<ApiMessage, BackendError> {
        self.post_json("/orders", &CheckoutRequest { user_id }).await
    }

    /// Fetch the sales revenue summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn sales_summary(&self) -> Result<SalesSummary, BackendError> {
        self.get_json("/analytics/sales", &[]).await
    }

    /// Fetch the most-ordered products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn popular_products(&self) -> Result<Vec<PopularProduct>, BackendError> {
        self.get_json("/analytics/popular-products", &[]).await
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let mut request = self.inner.client.get(self.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        Self::read_json(request.send().await?).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::read_json(response).await
    }

    /// Map a response: 2xx parses the body, anything else surfaces the
    /// backend's `message` field when one is present.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiMessage>(&body)
                .ok()
                .and_then(|ack| ack.message);
            tracing::error!(
                status = %status,
                message = ?message,
                "Backend returned non-success status"
            );
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| parse_error(e, &body))
    }
}

fn parse_error(e: serde_json::Error, body: &str) -> BackendError {
    tracing::error!(
        error = %e,
        body = %body.chars().take(500).collect::<String>(),
        "Failed to parse backend response"
    );
    BackendError::Parse(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = BackendError::Api {
            status: 404,
            message: Some("Cart not found".to_owned()),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Cart not found");

        let err = BackendError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): no message");
    }

    #[test]
    fn test_user_message_prefers_server_words() {
        let err = BackendError::Api {
            status: 400,
            message: Some("Not enough stock".to_owned()),
        };
        assert_eq!(err.user_message(), "Not enough stock");
    }

    #[test]
    fn test_user_message_generic_fallback() {
        let err = BackendError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), "The store returned an error (HTTP 502).");
    }
}
