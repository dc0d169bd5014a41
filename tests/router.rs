//! Router-level tests that need no database: liveness and the validation
//! surface (inputs are rejected before any store access, so a lazy pool that
//! never connects is enough).

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use portfolio_api::{api_routes, common_routes, AppState};
use tower::ServiceExt;

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/portfolio_router_tests")
        .expect("lazy pool");
    let state = AppState { pool };
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn healthcheck_reports_ok_with_timestamp() {
    let response = test_app().oneshot(get("/healthcheck")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn version_reports_crate_metadata() {
    let response = test_app().oneshot(get("/version")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "portfolio-api");
}

#[tokio::test]
async fn create_skill_rejects_out_of_range_level() {
    let response = test_app()
        .oneshot(post_json(
            "/createSkill",
            serde_json::json!({ "name": "Rust", "category": "backend", "level": 0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("level"));
}

#[tokio::test]
async fn create_testimonial_rejects_out_of_range_rating() {
    let response = test_app()
        .oneshot(post_json(
            "/createTestimonial",
            serde_json::json!({
                "client_name": "Ada",
                "client_position": "CTO",
                "client_company": "Initech",
                "testimonial": "fine",
                "rating": 6
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_user_rejects_malformed_email() {
    let response = test_app()
        .oneshot(post_json(
            "/createUser",
            serde_json::json!({ "name": "Ada", "email": "nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn contact_messages_filter_is_validated() {
    let app = test_app();
    for uri in [
        "/getContactMessages?status=bogus",
        "/getContactMessages?limit=0",
        "/getContactMessages?offset=-1",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "expected validation failure for {}",
            uri
        );
    }
}

#[tokio::test]
async fn projects_filter_is_validated() {
    let response = test_app()
        .oneshot(get("/getProjects?limit=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
