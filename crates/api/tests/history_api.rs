//! HTTP-level integration tests for the work history log.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn append_and_list_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/history",
        json!({ "description": "Initial setup", "effortHours": 2.5, "claudePrompt": "set up" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;
    assert_eq!(first["description"], "Initial setup");
    assert_eq!(first["effortHours"], 2.5);
    assert_eq!(first["claudePrompt"], "set up");
    assert_eq!(first["timestamp"].as_str().unwrap().len(), 19);

    let second = body_json(
        post_json(app.clone(), "/api/history", json!({ "description": "Checkout" })).await,
    )
    .await;
    assert_eq!(second["effortHours"], 0.0);
    assert_eq!(second["claudePrompt"], "");

    let list = body_json(get(app, "/api/history").await).await;
    let ids: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![second["id"].as_i64().unwrap(), first["id"].as_i64().unwrap()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_optional_fields_take_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "description": "Fix typo", "effortHours": null, "claudePrompt": null });
    let response = post_json(app, "/api/history", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["effortHours"], 0.0);
    assert_eq!(json["claudePrompt"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_description_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    for body in [
        json!({ "description": "   " }),
        json!({ "effortHours": 1 }),
        json!({ "description": null }),
    ] {
        let response = post_json(app.clone(), "/api/history", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Description is required");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn effort_out_of_range_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    for hours in [json!(-1), json!(1000), json!(1.234)] {
        let body = json!({ "description": "x", "effortHours": hours });
        let response = post_json(app.clone(), "/api/history", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{hours}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_history_is_empty_array(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/history").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
