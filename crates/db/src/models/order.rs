//! Order header and line item models.
//!
//! Orders are written once, together with their items, and never updated.
//! The `*Row` structs mirror the tables; [`Order`] and [`OrderItem`] are the
//! assembled shapes returned to clients.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use storefront_core::orders::{PricedLine, ShippingInfo};
use storefront_core::types::{display_timestamp, DbId, Timestamp};

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub total_amount: Decimal,
    pub ordered_at: Timestamp,
    pub shipping_name: String,
    pub shipping_address: String,
    pub shipping_phone_number: String,
}

/// A row from `order_items`, with `line_no` exposed as the item id.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemRow {
    pub line_no: i32,
    pub order_id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// An order line as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 1-based position within the order.
    pub id: i32,
    pub order_id: DbId,
    pub product_id: DbId,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

impl OrderItem {
    pub fn from_priced(order_id: DbId, priced: &PricedLine) -> Self {
        Self {
            id: priced.line_no,
            order_id,
            product_id: priced.line.product_id,
            name: priced.line.name.clone(),
            price: priced.line.price,
            quantity: priced.line.quantity,
            subtotal: priced.subtotal,
        }
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        // NUMERIC(12,2) x INTEGER stays far inside the Decimal range.
        let subtotal = row.price * Decimal::from(row.quantity);
        Self {
            id: row.line_no,
            order_id: row.order_id,
            product_id: row.product_id,
            name: row.product_name,
            price: row.price,
            quantity: row.quantity,
            subtotal,
        }
    }
}

/// A complete order with its items, newest-first in listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: DbId,
    /// `None` for guest checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    #[serde(rename = "timestamp", serialize_with = "display_timestamp::serialize")]
    pub ordered_at: Timestamp,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub shipping_info: ShippingInfo,
}

impl Order {
    /// Attach `items` to a header row.
    pub fn from_row(row: OrderRow, items: Vec<OrderItem>) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            ordered_at: row.ordered_at,
            items,
            total_amount: row.total_amount,
            shipping_info: ShippingInfo {
                name: row.shipping_name,
                address: row.shipping_address,
                phone_number: row.shipping_phone_number,
            },
        }
    }
}
