mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

// Public surface: these routes answer without any session.

#[tokio::test]
async fn landing_page_responds_without_auth() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/json"), "content-type: {}", content_type);

    Ok(())
}

#[tokio::test]
async fn login_form_responds_without_auth() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().uri("/login").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn register_form_responds_without_auth() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().uri("/register").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
