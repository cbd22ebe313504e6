//! Catalogue product model.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::DbId;

/// A row from the `products` table. Seeded by migration, read-only at runtime.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category: String,
}
