//! Domain logic for the storefront backend.
//!
//! Everything in this crate is pure: validation rules, server-side order
//! pricing, catalogue filter normalisation, and the shared error taxonomy.
//! Persistence lives in `storefront-db`, HTTP in `storefront-api`.

pub mod error;
pub mod history;
pub mod orders;
pub mod products;
pub mod types;
pub mod users;
