//! Route-table tests that never touch a live database: the pool is lazy and
//! every asserted path is rejected before a query could run.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use roster_api::db::Store;
use roster_api::router::{AppState, roster_router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tower::ServiceExt;

fn app() -> Router {
    // Never connects: nothing in these tests reaches the query layer.
    let pool = PgPoolOptions::new().connect_lazy_with(
        PgConnectOptions::new()
            .host("localhost")
            .username("unused")
            .database("unused"),
    );
    roster_router(AppState::new(Store::with_pool(pool)))
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn unknown_route_hits_the_fallback() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/classroom/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_is_rejected_before_any_write() {
    for (method, uri) in [
        ("POST", "/api/course/"),
        ("PUT", "/api/course/1"),
        ("POST", "/api/person/"),
        ("PUT", "/api/person/1"),
    ] {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "{method} {uri} should reject a malformed body"
        );
        assert_eq!(body_string(resp).await, "Invalid input");
    }
}

#[tokio::test]
async fn non_numeric_course_id_is_a_bad_request() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/course/linear-algebra")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn collection_routes_reject_unmapped_methods() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/course/7")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"x"}"#))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
