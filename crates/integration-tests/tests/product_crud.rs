//! Integration tests for catalog CRUD over HTTP.

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use greenleaf_core::Product;
use greenleaf_integration_tests::{TestServer, aspirin_json, client, login};

#[tokio::test]
async fn test_create_then_list_contains_the_record() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let resp = client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("create body unparseable");
    assert_eq!(body["message"], json!("Product added successfully"));
    assert_eq!(body["product"]["id"], json!("p1"));

    let products: Vec<Product> = client
        .get(server.url("/api/products"))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list body unparseable");

    assert_eq!(products.len(), 1);
    let product = products.first().expect("missing created product");
    assert_eq!(product.id.as_str(), "p1");
    assert_eq!(product.name, "Aspirin");
    assert_eq!(product.price, "9.99".parse::<Decimal>().expect("bad decimal"));
}

#[tokio::test]
async fn test_catalog_listing_is_public() {
    let server = TestServer::spawn().await;
    let client = client();

    let resp = client
        .get(server.url("/api/products"))
        .send()
        .await
        .expect("list request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = resp.json().await.expect("list body unparseable");
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_mutations_without_session_are_unauthorized_and_store_untouched() {
    let server = TestServer::spawn().await;
    let client = client();

    let create = client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);

    let update = client
        .put(server.url("/api/products/p1"))
        .json(&json!({ "price": 12.5 }))
        .send()
        .await
        .expect("update request failed");
    assert_eq!(update.status(), StatusCode::UNAUTHORIZED);

    let delete = client
        .delete(server.url("/api/products/p1"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(delete.status(), StatusCode::UNAUTHORIZED);

    // No write ever reached the store.
    assert!(server.store_bytes().is_empty());
}

#[tokio::test]
async fn test_duplicate_create_conflicts_and_preserves_store() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let first = client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");
    assert_eq!(first.status(), StatusCode::CREATED);
    let before = server.store_bytes();

    let mut dup = aspirin_json();
    dup["name"] = json!("A different name");
    let second = client
        .post(server.url("/api/products"))
        .json(&dup)
        .send()
        .await
        .expect("create request failed");

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: Value = second.json().await.expect("conflict body unparseable");
    assert_eq!(body["message"], json!("Product ID already exists"));
    assert_eq!(server.store_bytes(), before);
}

#[tokio::test]
async fn test_create_with_negative_price_is_rejected() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let resp = client
        .post(server.url("/api/products"))
        .json(&json!({ "id": "p1", "name": "X", "image": "/i.png", "price": -5 }))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(server.store_bytes().is_empty());
}

#[tokio::test]
async fn test_create_with_missing_fields_is_rejected() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let resp = client
        .post(server.url("/api/products"))
        .json(&json!({ "id": "p1", "price": 9.99 }))
        .send()
        .await
        .expect("create request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(server.store_bytes().is_empty());
}

#[tokio::test]
async fn test_update_merges_patch_and_persists_merged_record() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");

    let resp = client
        .put(server.url("/api/products/p1"))
        .json(&json!({ "price": 12.5 }))
        .send()
        .await
        .expect("update request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("update body unparseable");
    assert_eq!(body["message"], json!("Product updated successfully"));
    assert_eq!(body["product"]["name"], json!("Aspirin"));
    assert_eq!(body["product"]["image"], json!("/i/p1.png"));

    // The persisted store now holds exactly the merged record.
    let stored: Vec<Product> =
        serde_json::from_slice(&server.store_bytes()).expect("store unparseable");
    assert_eq!(stored.len(), 1);
    let product = stored.first().expect("missing stored product");
    assert_eq!(product.id.as_str(), "p1");
    assert_eq!(product.name, "Aspirin");
    assert_eq!(product.image, "/i/p1.png");
    assert_eq!(product.price, "12.5".parse::<Decimal>().expect("bad decimal"));
}

#[tokio::test]
async fn test_update_ignores_id_in_body() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");

    let resp = client
        .put(server.url("/api/products/p1"))
        .json(&json!({ "id": "p2", "price": 12.5 }))
        .send()
        .await
        .expect("update request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("update body unparseable");
    assert_eq!(body["product"]["id"], json!("p1"));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let resp = client
        .put(server.url("/api/products/ghost"))
        .json(&json!({ "price": 12.5 }))
        .send()
        .await
        .expect("update request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("not-found body unparseable");
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");

    let resp = client
        .delete(server.url("/api/products/p1"))
        .send()
        .await
        .expect("delete request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("delete body unparseable");
    assert_eq!(body["message"], json!("Product deleted successfully"));

    let products: Vec<Product> = client
        .get(server.url("/api/products"))
        .send()
        .await
        .expect("list request failed")
        .json()
        .await
        .expect("list body unparseable");
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found_and_store_unchanged() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    client
        .post(server.url("/api/products"))
        .json(&aspirin_json())
        .send()
        .await
        .expect("create request failed");
    let before = server.store_bytes();

    let resp = client
        .delete(server.url("/api/products/ghost"))
        .send()
        .await
        .expect("delete request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.store_bytes(), before);
}
