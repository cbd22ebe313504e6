//! Order validation and server-side pricing.
//!
//! Clients submit line items with a unit price and quantity, plus a total
//! they computed themselves. The submitted total is never trusted: every
//! subtotal and the order total are recomputed here before anything is
//! written.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{null_as_default, DbId};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_EMPTY_ORDER: &str = "order must contain at least one item";
pub const MSG_SHIPPING_REQUIRED: &str = "shipping name and address are required";
pub const MSG_NON_POSITIVE_QUANTITY: &str = "item quantity must be positive";
pub const MSG_NEGATIVE_PRICE: &str = "item price must not be negative";
pub const MSG_PRICE_PRECISION: &str = "item price must have at most two decimal places";
pub const MSG_TOTAL_OUT_OF_RANGE: &str = "order total is out of range";

/// Maximum number of decimal places accepted on a unit price (`NUMERIC(12,2)`).
pub const MAX_PRICE_SCALE: u32 = 2;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// A line item as submitted by the client.
///
/// Request bodies may also carry `id`, `orderId` and `subtotal`; serde drops
/// them since they are always assigned server-side. Absent or `null` fields
/// take zero values, so a line without a quantity fails [`validate_line`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: DbId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i32,
}

/// Shipping snapshot stored on the order header.
///
/// Missing or `null` fields deserialize as empty strings so that blank and
/// absent values are both caught by [`validate_shipping`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
}

// ---------------------------------------------------------------------------
// Priced output
// ---------------------------------------------------------------------------

/// A validated line with its 1-based position and server-computed subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub line_no: i32,
    pub line: OrderLine,
    pub subtotal: Decimal,
}

/// A validated order ready to be persisted as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    pub user_id: Option<DbId>,
    pub shipping: ShippingInfo,
    pub lines: Vec<PricedLine>,
    pub total_amount: Decimal,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// An order needs at least one line.
pub fn validate_item_count(count: usize) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::validation(MSG_EMPTY_ORDER));
    }
    Ok(())
}

/// Shipping name and address must contain something other than whitespace.
pub fn validate_shipping(shipping: &ShippingInfo) -> Result<(), CoreError> {
    if shipping.name.trim().is_empty() || shipping.address.trim().is_empty() {
        return Err(CoreError::validation(MSG_SHIPPING_REQUIRED));
    }
    Ok(())
}

/// Quantity must be positive; price must be non-negative with cent precision.
pub fn validate_line(line: &OrderLine) -> Result<(), CoreError> {
    if line.quantity <= 0 {
        return Err(CoreError::validation(MSG_NON_POSITIVE_QUANTITY));
    }
    if line.price.is_sign_negative() && !line.price.is_zero() {
        return Err(CoreError::validation(MSG_NEGATIVE_PRICE));
    }
    if line.price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(CoreError::validation(MSG_PRICE_PRECISION));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// `price * quantity`, or `None` if the product does not fit a `Decimal`.
pub fn line_subtotal(price: Decimal, quantity: i32) -> Option<Decimal> {
    price.checked_mul(Decimal::from(quantity))
}

/// Validate an order and recompute every amount from its lines.
///
/// Lines keep their submission order and are numbered from 1.
pub fn price_order(
    lines: Vec<OrderLine>,
    shipping: ShippingInfo,
    user_id: Option<DbId>,
) -> Result<PricedOrder, CoreError> {
    validate_item_count(lines.len())?;
    validate_shipping(&shipping)?;

    let mut total_amount = Decimal::ZERO;
    let mut priced = Vec::with_capacity(lines.len());

    for (line_no, line) in (1..).zip(lines) {
        validate_line(&line)?;

        let subtotal = line_subtotal(line.price, line.quantity)
            .ok_or_else(|| CoreError::validation(MSG_TOTAL_OUT_OF_RANGE))?;
        total_amount = total_amount
            .checked_add(subtotal)
            .ok_or_else(|| CoreError::validation(MSG_TOTAL_OUT_OF_RANGE))?;

        priced.push(PricedLine {
            line_no,
            line,
            subtotal,
        });
    }

    Ok(PricedOrder {
        user_id,
        shipping,
        lines: priced,
        total_amount,
    })
}
