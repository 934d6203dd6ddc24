//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Registration, login, and logout against the backend

pub mod auth;
