//! Storefront API server library.
//!
//! Exposes config, state, error handling, extractors, routes and the shared router
//! builder so integration tests and the binary entrypoint use the same code.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
