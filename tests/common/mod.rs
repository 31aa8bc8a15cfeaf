#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_api::auth::{generate_jwt, Claims};
use catalog_api::testing::{MemoryProductStore, MemoryReviewStore, MemoryUserStore};
use catalog_api::{app, AppState};

/// Router wired to in-memory stores, with handles kept for side-effect
/// assertions.
pub struct TestApp {
    pub router: Router,
    pub reviews: Arc<MemoryReviewStore>,
    pub products: Arc<MemoryProductStore>,
    pub users: Arc<MemoryUserStore>,
}

pub fn test_app() -> TestApp {
    let reviews = Arc::new(MemoryReviewStore::default());
    let products = Arc::new(MemoryProductStore::default());
    let users = Arc::new(MemoryUserStore::default());

    let state = AppState {
        reviews: reviews.clone(),
        products: products.clone(),
        users: users.clone(),
    };

    TestApp {
        router: app(state),
        reviews,
        products,
        users,
    }
}

/// A token the auth guard accepts, for an arbitrary principal
pub fn bearer_token() -> String {
    let claims = Claims::new(
        "tester@example.com".to_string(),
        "64f000000000000000000aaa".to_string(),
    );
    generate_jwt(claims).expect("test token")
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub fn review_payload(product_id: &str) -> Value {
    json!({
        "authorName": "name author",
        "title": "title review",
        "description": "description review",
        "rating": 5,
        "productId": product_id,
    })
}

pub const PRODUCT_ID: &str = "64f000000000000000000001";
