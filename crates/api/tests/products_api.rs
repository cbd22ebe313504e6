//! HTTP-level integration tests for the product catalogue.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

fn names(json: &serde_json::Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_products(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let products = json.as_array().unwrap();
    assert_eq!(products.len(), 22);

    let first = &products[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Fresh Avocado");
    assert_eq!(first["price"], 280.0);
    assert_eq!(first["category"], "Food");
    assert!(first["imageUrl"].is_string());
    assert!(first["description"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_all_is_no_filter(pool: PgPool) {
    let app = common::build_test_app(pool);

    let all = body_json(get(app.clone(), "/api/products?category=all").await).await;
    let unfiltered = body_json(get(app, "/api/products").await).await;
    assert_eq!(all, unfiltered);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filter_by_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/products?category=Bakery").await).await;

    assert_eq!(names(&json), vec!["Croissant", "Sandwich Loaf", "Plain Bagel"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_over_name_and_category(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/products?search=coffee").await).await;
    assert_eq!(names(&json), vec!["Coffee Beans", "Coffee Cup"]);

    let json = body_json(get(app, "/api/products?search=STATIONERY").await).await;
    assert_eq!(names(&json), vec!["Colour Pencil Set", "Fountain Pen"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_and_search_combine(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/products?category=Home&search=coffee").await).await;

    assert_eq!(names(&json), vec!["Coffee Cup"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_match_is_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products?search=zzz-nothing").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_product_by_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/4").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Croissant");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_product_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/products/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_product_id_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in ["/api/products/abc", "/api/products/-1", "/api/products/1.5"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["error"], "Invalid product ID");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn categories_are_sorted_and_distinct(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let categories: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "Bakery", "Books", "Drinks", "Fashion", "Flowers", "Food", "Home", "Kitchen",
            "Stationery", "Sweets"
        ]
    );
}
