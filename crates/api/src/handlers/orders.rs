//! Handlers for the order ledger.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use storefront_core::orders::{price_order, OrderLine, ShippingInfo};
use storefront_core::types::{null_as_default, DbId};
use storefront_db::repositories::OrderRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /orders`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// `null` and absent both mean no items, which validation rejects.
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<OrderLine>,
    /// Client-computed total. Only logged; the stored total is recomputed.
    pub total_amount: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub shipping_info: ShippingInfo,
    pub user_id: Option<DbId>,
}

/// POST /api/orders
///
/// Validates and reprices the order, then writes the header and all items
/// in one transaction.
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let priced = price_order(input.items, input.shipping_info, input.user_id)?;

    if let Some(declared) = input.total_amount {
        if declared != priced.total_amount {
            tracing::debug!(
                %declared,
                computed = %priced.total_amount,
                "Ignoring client-declared order total"
            );
        }
    }

    let order = OrderRepo::create(&state.pool, &priced).await?;

    tracing::info!(
        order_id = order.id,
        user_id = ?order.user_id,
        item_count = order.items.len(),
        total = %order.total_amount,
        "Order created"
    );

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders
///
/// Every order with its items, newest first.
pub async fn list_orders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_with_items(&state.pool).await?;
    Ok(Json(orders))
}
