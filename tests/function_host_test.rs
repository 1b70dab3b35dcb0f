//! Integration tests for the function host
//!
//! These drive the full router the way the binary assembles it: the greeting
//! function mounted at `/` plus the operational routes.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use funclet::api::create_app_router;
use funclet::function::GreetingFunction;
use http_body_util::BodyExt;
use tower::ServiceExt; // for oneshot

fn app() -> Router {
    create_app_router(GreetingFunction::default(), &[Method::GET, Method::POST]).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_root_returns_greeting() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], br#"{"Message":"Hello!"}"#);
}

#[tokio::test]
async fn post_root_ignores_body() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name": "ignored", "count": 42}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["Message"], "Hello!");
}

#[tokio::test]
async fn custom_greeting_is_returned_exactly() {
    let router =
        create_app_router(GreetingFunction::new("Hello").unwrap(), &[Method::GET]).unwrap();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["Message"], "Hello");
}

#[tokio::test]
async fn unsupported_method_is_rejected_by_router() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/no-such-function")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_requests_yield_identical_responses() {
    let app = app();

    let mut bodies = Vec::new();
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(body_json(response).await);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn concurrent_requests_do_not_affect_each_other() {
    let app = app();

    let requests = (0..16).map(|i| {
        let app = app.clone();
        async move {
            let method = if i % 2 == 0 { "GET" } else { "POST" };
            let response = app
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/")
                        .body(Body::from(format!("request-{i}")))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            body_json(response).await
        }
    });

    let bodies = futures::future::join_all(requests).await;
    for body in bodies {
        assert_eq!(body["Message"], "Hello!");
    }
}

#[tokio::test]
async fn health_reports_host_status() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["greeting"], "Hello!");
}

#[tokio::test]
async fn duplicate_method_list_is_rejected_at_startup() {
    let result = create_app_router(GreetingFunction::default(), &[Method::GET, Method::GET]);
    assert!(result.is_err(), "duplicate methods should surface as Err");
}

#[tokio::test]
async fn extension_method_cannot_be_mounted() {
    let method = Method::from_bytes(b"TELEPORT").unwrap();
    let result = create_app_router(GreetingFunction::default(), &[method]);
    assert!(result.is_err());
}
