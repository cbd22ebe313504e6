pub mod health;
pub mod history;
pub mod orders;
pub mod products;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                      plaintext greeting
///
/// /products                   list (category, search filters)
/// /products/{id}              get
/// /categories                 distinct categories
///
/// /users/register             register (POST)
/// /users/login                login (POST)
///
/// /orders                     list, create
///
/// /history                    list, append
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        // Catalogue.
        .nest("/products", products::router())
        .route("/categories", get(handlers::products::list_categories))
        // Users.
        .nest("/users", users::router())
        // Order ledger.
        .nest("/orders", orders::router())
        // Work log.
        .nest("/history", history::router())
}
