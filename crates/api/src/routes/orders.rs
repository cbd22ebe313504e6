use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /   -> list_orders
/// POST /   -> create_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(orders::list_orders).post(orders::create_order))
}
