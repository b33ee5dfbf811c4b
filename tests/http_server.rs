//! HTTP behavior of the history-mode server.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use spa_router::config::{parse_config, AppConfig};
use spa_router::http::{AppState, HttpServer};
use spa_router::routing::RouteTable;

mod common;

fn app() -> axum::Router {
    let state = AppState {
        table: Arc::new(RouteTable::default_table()),
    };
    HttpServer::build_router(&AppConfig::default(), state)
}

async fn get(path: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_default_view() {
    let res = get("/").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], "/test1");
}

#[tokio::test]
async fn test_root_redirect_keeps_query() {
    let res = get("/?ref=mail").await;
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[header::LOCATION], "/test1?ref=mail");

    // A query on a plain view route does not change what renders.
    let res = get("/test2?tab=a").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_encoded_path_matches_decoded_route() {
    let config = parse_config(
        r#"
        [[routes]]
        path = "/"
        redirect = "/über"

        [[routes]]
        path = "/über"
        view = "Test2"
        "#,
    )
    .unwrap();
    let state = AppState {
        table: Arc::new(config.route_table().unwrap()),
    };
    let router = HttpServer::build_router(&config, state);

    let res = router
        .clone()
        .oneshot(Request::builder().uri("/%C3%BCber").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains(r#"data-view="Test2""#));

    let res = router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.headers()[header::LOCATION], "/%C3%BCber");

    // Not valid UTF-8 once decoded.
    let res = router
        .oneshot(Request::builder().uri("/%FF").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_view_paths_render_pages() {
    for (path, view) in [("/test1", "Test1"), ("/test2", "Test2"), ("/test3", "Test3")] {
        let res = get(path).await;
        assert_eq!(res.status(), StatusCode::OK, "status for {}", path);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = body_text(res).await;
        assert!(body.contains(&format!(r#"data-view="{}""#, view)));
    }
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let res = get("/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_text(res).await;
    assert!(body.contains("Not Found"));
    assert!(body.contains("/nope"));
}

#[tokio::test]
async fn test_request_id_assigned_and_propagated() {
    let res = get("/test2").await;
    let generated = res.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let res = app()
        .oneshot(
            Request::builder()
                .uri("/test2")
                .header("x-request-id", "client-supplied")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "client-supplied");
}

#[tokio::test]
async fn test_non_get_is_rejected() {
    let res = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/test1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_served_over_tcp_until_shutdown() {
    let (addr, shutdown, handle) = common::start_server().await;
    let client = common::client();

    let res = client.get(format!("http://{}/", addr)).send().await.unwrap();
    assert_eq!(res.status(), 307);
    assert_eq!(res.headers()["location"], "/test1");

    let res = client
        .get(format!("http://{}/test3", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Test Page Three"));

    let res = client
        .get(format!("http://{}/healthz", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "ok");

    shutdown.trigger();
    let stopped = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop after shutdown");
    assert!(stopped.unwrap().is_ok());
    assert!(client
        .get(format!("http://{}/test1", addr))
        .send()
        .await
        .is_err());
}
