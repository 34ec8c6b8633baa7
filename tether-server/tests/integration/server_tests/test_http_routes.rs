use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::path::PathBuf;
use tether_server::{AppState, LIVENESS_TEXT, router};
use tower::ServiceExt;

use crate::integration::{bundled_static_dir, init_tracing};

async fn get(static_dir: PathBuf, uri: &str) -> (StatusCode, String) {
    let app = router(AppState::new(), &static_dir);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_index_reports_liveness() {
    init_tracing();

    let (status, body) = get(bundled_static_dir(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, LIVENESS_TEXT);
}

#[tokio::test]
async fn test_panel_is_served_from_static_dir() {
    let (status, body) = get(bundled_static_dir(), "/panel").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("start-broadcast-request"));
}

#[tokio::test]
async fn test_missing_panel_is_404() {
    let (status, _) = get(PathBuf::from("/nonexistent/tether"), "/panel").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = router(AppState::new(), &bundled_static_dir());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://tablet.local")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
