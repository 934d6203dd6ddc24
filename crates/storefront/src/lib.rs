//! ToyChest Storefront library.
//!
//! Client library for the toy-store backend: configuration, session store,
//! REST client, display models, and the auth service. The CLI front end
//! drives these; nothing here touches the terminal directly.
//!
//! The backend owns all catalog and cart state. After every cart mutation the
//! caller re-fetches the authoritative snapshot and re-renders it; nothing is
//! patched incrementally or cached between views.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod views;
