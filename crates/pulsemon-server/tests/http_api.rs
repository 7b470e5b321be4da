#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use pulsemon_core::MetricStore;
use pulsemon_server::{app_state::AppState, router};

fn app() -> (Router, Arc<MetricStore>) {
    let store = Arc::new(MetricStore::new());
    let state = AppState::with_store(Arc::clone(&store));
    (router::build_router(state), store)
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let ctype = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, ctype, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn update_gauge_then_read_it_back() {
    let (app, store) = app();

    let (status, _, _) = call(&app, Method::POST, "/update/gauge/testGauge/42.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.get_gauge("testGauge").unwrap(), 42.5);

    let (status, ctype, body) = call(&app, Method::GET, "/value/gauge/testGauge").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ctype.unwrap().starts_with("text/plain"));
    assert_eq!(body, "42.500");
}

#[tokio::test]
async fn update_counter_accumulates() {
    let (app, store) = app();

    for v in ["10", "5"] {
        let uri = format!("/update/counter/testCounter/{v}");
        let (status, _, _) = call(&app, Method::POST, &uri).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(store.get_counter("testCounter").unwrap(), 15);

    let (_, _, body) = call(&app, Method::GET, "/value/counter/testCounter").await;
    assert_eq!(body, "15");
}

#[tokio::test]
async fn invalid_type_is_bad_request() {
    let (app, _) = app();
    let (status, _, _) = call(&app, Method::POST, "/update/invalid/testMetric/42").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = call(&app, Method::GET, "/value/invalid/testMetric").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_value_is_bad_request() {
    let (app, _) = app();
    let (status, _, body) = call(&app, Method::POST, "/update/gauge/g/none").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("invalid value"));

    let (status, _, _) = call(&app, Method::POST, "/update/counter/c/2.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn short_paths_are_not_found() {
    let (app, _) = app();
    let (status, _, _) = call(&app, Method::POST, "/update/gauge/g").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = call(&app, Method::POST, "/update/gauge").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = call(&app, Method::GET, "/value/gauge").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_metric_is_not_found() {
    let (app, _) = app();
    let (status, _, _) = call(&app, Method::GET, "/value/gauge/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = call(&app, Method::GET, "/value/counter/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_is_plain_text() {
    let (app, _) = app();

    let (status, ctype, body) = call(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ctype.unwrap().starts_with("text/plain"));
    assert_eq!(body, "Metrics:\n\nGauges:\n\nCounters:\n");

    call(&app, Method::POST, "/update/gauge/Alloc/1024.000000").await;
    call(&app, Method::POST, "/update/counter/PollCount/1").await;

    let (_, _, body) = call(&app, Method::GET, "/").await;
    assert_eq!(body, "Metrics:\n\nGauges:\nAlloc: 1024.000\n\nCounters:\nPollCount: 1\n");
}

#[tokio::test]
async fn healthz_is_ok() {
    let (app, _) = app();
    let (status, _, body) = call(&app, Method::GET, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
