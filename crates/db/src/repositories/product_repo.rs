//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::products::ProductFilter;
use storefront_core::types::DbId;

use crate::models::product::Product;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, description, image_url, category";

/// Read-only access to the catalogue.
pub struct ProductRepo;

impl ProductRepo {
    /// List products matching `filter`, ordered by id.
    ///
    /// A `NULL` parameter switches its predicate off, so one statement
    /// covers every filter combination.
    pub async fn list(pool: &PgPool, filter: &ProductFilter) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE ($1::text IS NULL OR category = $1)
               AND ($2::text IS NULL OR name ILIKE $2 OR category ILIKE $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(filter.category.as_deref())
            .bind(filter.search_pattern())
            .fetch_all(pool)
            .await
    }

    /// Find a product by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Distinct categories in alphabetical order.
    pub async fn list_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM products ORDER BY category")
            .fetch_all(pool)
            .await
    }
}
