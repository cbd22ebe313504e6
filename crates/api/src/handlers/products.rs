//! Handlers for the read-only product catalogue.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::products::{parse_product_id, ProductFilter};
use storefront_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /api/products?category=&search=
///
/// `category=all` (or empty) lists every category. `search` matches name or
/// category, case-insensitively.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = ProductFilter::from_query(params.category.as_deref(), params.search.as_deref());
    let products = ProductRepo::list(&state.pool, &filter).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
///
/// The id is taken as a raw string so that a non-numeric value is reported
/// as a validation error rather than an extractor rejection.
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_product_id(&raw_id)?;
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;
    Ok(Json(product))
}

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = ProductRepo::list_categories(&state.pool).await?;
    Ok(Json(categories))
}
