mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::{bearer_token, review_payload, send, test_app};

fn product_payload() -> serde_json::Value {
    json!({
        "title": "Wireless headphones",
        "description": "Over-ear, 30h battery",
        "price": 12900,
    })
}

#[tokio::test]
async fn product_create_requires_auth() -> Result<()> {
    let app = test_app();

    let (status, body) =
        send(&app.router, "POST", "/product/create", Some(product_payload()), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthorized");

    let token = bearer_token();
    let (status, body) =
        send(&app.router, "POST", "/product/create", Some(product_payload()), Some(&token)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["_id"].as_str().expect("_id defined").len(), 24);
    assert_eq!(body["title"], "Wireless headphones");
    Ok(())
}

#[tokio::test]
async fn product_read_recomputes_rating_aggregate() -> Result<()> {
    let app = test_app();
    let token = bearer_token();

    let (_, product) =
        send(&app.router, "POST", "/product/create", Some(product_payload()), Some(&token)).await?;
    let id = product["_id"].as_str().expect("_id");
    let uri = format!("/product/{}", id);

    let (status, body) = send(&app.router, "GET", &uri, None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviewCount"], 0);
    assert_eq!(body["reviewAvg"], json!(null));

    let mut low = review_payload(id);
    low["rating"] = json!(2);
    send(&app.router, "POST", "/review/create", Some(low), None).await?;
    send(&app.router, "POST", "/review/create", Some(review_payload(id)), None).await?;

    let (status, body) = send(&app.router, "GET", &uri, None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviewCount"], 2);
    assert_eq!(body["reviewAvg"], 3.5);
    Ok(())
}

#[tokio::test]
async fn product_read_guards_id_format_and_existence() -> Result<()> {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/product/$1", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ID_VALIDATION_ERROR");

    let (status, body) =
        send(&app.router, "GET", "/product/64f000000000000000000009", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "statusCode": 404, "message": "PRODUCT_NOT_FOUND" }));
    Ok(())
}

#[tokio::test]
async fn product_delete_cascades_review_removal() -> Result<()> {
    let app = test_app();
    let token = bearer_token();

    let (_, product) =
        send(&app.router, "POST", "/product/create", Some(product_payload()), Some(&token)).await?;
    let id = product["_id"].as_str().expect("_id");
    send(&app.router, "POST", "/review/create", Some(review_payload(id)), None).await?;
    send(&app.router, "POST", "/review/create", Some(review_payload(id)), None).await?;

    let uri = format!("/product/{}", id);
    let (status, deleted) = send(&app.router, "DELETE", &uri, None, Some(&token)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["_id"], product["_id"]);
    assert!(app.reviews.is_empty());

    let (status, _) = send(&app.router, "DELETE", &uri, None, Some(&token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_product_payload_is_bad_request() -> Result<()> {
    let app = test_app();
    let token = bearer_token();

    let mut blank = product_payload();
    blank["title"] = json!("  ");
    let (status, _) =
        send(&app.router, "POST", "/product/create", Some(blank), Some(&token)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut negative = product_payload();
    negative["price"] = json!(-5);
    let (status, _) =
        send(&app.router, "POST", "/product/create", Some(negative), Some(&token)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
