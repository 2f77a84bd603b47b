mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::{TestContext, valid_form};
use portfolio_contact::routes::{RouterOptions, app_router};
use tower::ServiceExt;

fn contact_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(valid_form().to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let ctx = TestContext::new();
    let app = app_router(ctx.state.clone(), RouterOptions::default());

    let response = app.oneshot(contact_request("/process_contact/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ctx.mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_static_site_served_for_other_paths() {
    let ctx = TestContext::new();
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("index.html"), "<h1>Portfolio</h1>").unwrap();

    let options = RouterOptions {
        static_dir: Some(site.path().to_path_buf()),
        ..RouterOptions::default()
    };

    let app = app_router(ctx.state.clone(), options);
    let response = app
        .clone()
        .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<h1>Portfolio</h1>");

    // The contact route still wins over the static fallback
    let response = app.oneshot(contact_request("/process_contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_without_static_site() {
    let ctx = TestContext::new();
    let app = app_router(ctx.state.clone(), RouterOptions::default());

    let response = app
        .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
