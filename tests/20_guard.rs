mod common;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

// Access guard: every protected operation redirects an anonymous session to
// the login entry point without touching the handler.

async fn assert_redirects_to_login(method: Method, uri: &str) -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().method(method.clone()).uri(uri).body(Body::empty())?)
        .await?;

    assert_eq!(
        res.status(),
        StatusCode::SEE_OTHER,
        "{} {} should redirect when anonymous",
        method,
        uri
    );
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/login", "{} {}", method, uri);

    Ok(())
}

#[tokio::test]
async fn listing_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::GET, "/clients").await
}

#[tokio::test]
async fn creation_form_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::GET, "/clients/new").await
}

#[tokio::test]
async fn edit_form_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::GET, "/clients/7/edit").await
}

#[tokio::test]
async fn create_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::POST, "/clients").await
}

#[tokio::test]
async fn update_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::PUT, "/clients/7").await
}

#[tokio::test]
async fn delete_requires_a_session() -> Result<()> {
    assert_redirects_to_login(Method::DELETE, "/clients/7").await
}

#[tokio::test]
async fn filtered_listing_is_also_guarded() -> Result<()> {
    assert_redirects_to_login(Method::GET, "/clients?search=jane&status=2&sort_by=status").await
}

#[tokio::test]
async fn logout_succeeds_for_an_anonymous_session() -> Result<()> {
    let app = common::test_app();

    let res = app
        .oneshot(Request::builder().uri("/logout").body(Body::empty())?)
        .await?;

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(location, "/login");

    Ok(())
}
