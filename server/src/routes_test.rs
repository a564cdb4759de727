use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = asset_routes(Path::new("does-not-exist"));
    let response = app.oneshot(request("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_returns_not_found() {
    let app = asset_routes(Path::new("does-not-exist"));
    let response = app.oneshot(request("/pkg/farmtech.wasm")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = asset_routes(Path::new("does-not-exist"));
    let response = app.oneshot(request("/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
