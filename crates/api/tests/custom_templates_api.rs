//! Integration tests for the admin custom template endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, post, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BASE: &str = "/api/v1/admin/custom-templates";

async fn create(app: Router, body: Value) -> Value {
    let response = post_json(app, BASE, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn create_named(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = json!({ "name": name, "description": format!("{name} theme") });
    create(app, body).await["id"].as_i64().unwrap()
}

async fn list(pool: &PgPool) -> Vec<Value> {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, BASE).await).await;
    json["data"].as_array().unwrap().clone()
}

fn active_ids(templates: &[Value]) -> Vec<i64> {
    templates
        .iter()
        .filter(|t| t["is_active"] == true)
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_merges_partial_over_default(pool: PgPool) {
    let app = common::build_test_app(pool);
    let data = create(
        app,
        json!({
            "name": "Sunset",
            "description": "Warm",
            "colors": { "primary": "#ff7700" },
            "layout": { "typography": "elegant" }
        }),
    )
    .await;

    assert_eq!(data["name"], "Sunset");
    assert_eq!(data["category"], "business");
    assert_eq!(data["template"], "classic");
    assert_eq!(data["colors"]["primary"], "#ff7700");
    assert_eq!(data["colors"]["accent"], "#8b5cf6");
    assert_eq!(data["layout"]["typography"], "elegant");
    assert_eq!(data["layout"]["header_style"], "classic");
    assert_eq!(data["is_active"], false);
    assert_eq!(data["is_published"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_requires_name_and_description(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, BASE, json!({ "description": "No name" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, BASE, json!({ "name": "No description" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_template_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("{BASE}/12345")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn active_returns_204_when_none(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("{BASE}/active")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn activation_is_exclusive(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let b = create_named(&pool, "B").await;
    let c = create_named(&pool, "C").await;

    for id in [a, b, c] {
        let app = common::build_test_app(pool.clone());
        let response = post(app, &format!("{BASE}/{id}/activate")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(active_ids(&list(&pool).await), vec![c]);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("{BASE}/active")).await).await;
    assert_eq!(json["data"]["id"], c);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activating_unknown_template_keeps_current(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let app = common::build_test_app(pool.clone());
    post(app, &format!("{BASE}/{a}/activate")).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("{BASE}/9999/activate")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(active_ids(&list(&pool).await), vec![a]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn publish_is_independent_of_activation(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let b = create_named(&pool, "B").await;

    for id in [a, b] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, &format!("{BASE}/{id}/publish"), json!({ "publish": true })).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let app = common::build_test_app(pool.clone());
    post(app, &format!("{BASE}/{a}/activate")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/templates/published").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(app, &format!("{BASE}/{a}/publish"), json!({ "publish": false })).await,
    )
    .await;
    assert_eq!(json["data"]["is_published"], false);
    assert_eq!(json["data"]["is_active"], true);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/templates/published").await).await;
    let published = json["data"].as_array().unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0]["id"], b);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivate_clears_active(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let app = common::build_test_app(pool.clone());
    post(app, &format!("{BASE}/{a}/activate")).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("{BASE}/{a}/deactivate")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("{BASE}/active")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Update / duplicate / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_merges_and_keeps_flags(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let app = common::build_test_app(pool.clone());
    post_json(app, &format!("{BASE}/{a}/publish"), json!({ "publish": true })).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("{BASE}/{a}"),
        json!({ "template": "modern", "effects": { "blur": true } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "A");
    assert_eq!(data["template"], "modern");
    assert_eq!(data["effects"]["blur"], true);
    assert_eq!(data["effects"]["shadows"], true);
    assert_eq!(data["is_published"], true);

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("{BASE}/{a}"), json!({ "name": "  " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_update_is_rejected(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("{BASE}/{a}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_is_active_keeps_exclusivity(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    let b = create_named(&pool, "B").await;
    let app = common::build_test_app(pool.clone());
    post(app, &format!("{BASE}/{a}/activate")).await;

    let app = common::build_test_app(pool.clone());
    put_json(app, &format!("{BASE}/{b}"), json!({ "is_active": true })).await;

    assert_eq!(active_ids(&list(&pool).await), vec![b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_copies_without_flags(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let source = create(
        app,
        json!({
            "name": "Ocean",
            "description": "Blue",
            "category": "health",
            "layout": { "content_layout": "timeline" },
            "is_published": true
        }),
    )
    .await;
    let id = source["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post(app, &format!("{BASE}/{id}/duplicate")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let copy = body_json(response).await["data"].clone();
    assert_ne!(copy["id"], source["id"]);
    assert_eq!(copy["name"], "Ocean (Copy)");
    assert_eq!(copy["category"], "health");
    assert_eq!(copy["layout"], source["layout"]);
    assert_eq!(copy["colors"], source["colors"]);
    assert_eq!(copy["is_published"], false);
    assert_eq!(copy["is_active"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_active_leaves_none_active(pool: PgPool) {
    let a = create_named(&pool, "A").await;
    create_named(&pool, "B").await;
    let app = common::build_test_app(pool.clone());
    post(app, &format!("{BASE}/{a}/activate")).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("{BASE}/{a}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = list(&pool).await;
    assert_eq!(remaining.len(), 1);
    assert!(active_ids(&remaining).is_empty());

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("{BASE}/{a}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Random / preview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn random_keeps_identity_fields_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("{BASE}/random"),
        json!({ "name": "Draft", "description": "Keep", "category": "creative" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "Draft");
    assert_eq!(data["description"], "Keep");
    assert_eq!(data["category"], "creative");
    assert!(data["colors"]["primary"].as_str().unwrap().starts_with('#'));

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn random_without_body_starts_from_default(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, &format!("{BASE}/random")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "");
    assert_eq!(data["category"], "business");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn random_tolerates_null_theme_values(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("{BASE}/random"),
        json!({
            "name": "Draft",
            "category": null,
            "colors": { "accent": null },
            "layout": { "header_style": null },
            "effects": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["name"], "Draft");
    assert_eq!(data["category"], "business");
    assert_eq!(data["colors"]["accent"], "#8b5cf6");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_preview_falls_back_to_active_template(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let active = create(
        app,
        json!({
            "name": "Night",
            "description": "Dark",
            "template": "showcase",
            "colors": { "primary": "#111111" },
            "is_active": true
        }),
    )
    .await;
    assert_eq!(active["is_active"], true);

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("{BASE}/preview")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["template"], "showcase");
    assert_eq!(data["theme"]["colors"]["primary"], "#111111");
    assert_eq!(data["status_bar"]["live"], true);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("{BASE}/preview"),
        json!({ "template": "minimal", "colors": { "primary": "#222222" } }),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["template"], "minimal");
    assert_eq!(data["theme"]["colors"]["primary"], "#222222");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_preview_without_templates_is_classic(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, &format!("{BASE}/preview")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["template"], "classic");
    assert_eq!(data["theme"]["colors"]["primary"], "#3b82f6");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preview_renders_sample_content(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let source = create(
        app,
        json!({
            "name": "Dark",
            "description": "Night",
            "template": "showcase",
            "colors": { "primary": "#111111" },
            "effects": { "gradients": false }
        }),
    )
    .await;
    let id = source["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post(app, &format!("{BASE}/{id}/preview")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["template"], "showcase");
    assert_eq!(data["header"]["title"], "Sample App");
    assert_eq!(data["header"]["background"]["kind"], "solid");
    assert_eq!(data["header"]["background"]["color"], "#111111");
    assert_eq!(data["status_bar"]["live"], true);
    assert_eq!(data["bonus_list"]["entries"].as_array().unwrap().len(), 3);
}
