//! Integration tests for product image upload and serving.

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use greenleaf_integration_tests::{TestServer, client, login};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png-but-bytes";

fn image_form() -> Form {
    let part = Part::bytes(PNG_BYTES.to_vec())
        .file_name("pill.png")
        .mime_str("image/png")
        .expect("bad mime");
    Form::new().part("image", part)
}

#[tokio::test]
async fn test_upload_requires_session() {
    let server = TestServer::spawn().await;
    let client = client();

    let resp = client
        .post(server.url("/api/upload"))
        .multipart(image_form())
        .send()
        .await
        .expect("upload request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_stores_image_and_serves_it_back() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let resp = client
        .post(server.url("/api/upload"))
        .multipart(image_form())
        .send()
        .await
        .expect("upload request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("upload body unparseable");
    let image_url = body["imageUrl"].as_str().expect("imageUrl missing");
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".png"));

    // The returned URL is immediately servable with the original bytes.
    let served = client
        .get(server.url(image_url))
        .send()
        .await
        .expect("image fetch failed");
    assert_eq!(served.status(), StatusCode::OK);
    let bytes = served.bytes().await.expect("image body unreadable");
    assert_eq!(bytes.as_ref(), PNG_BYTES);

    // And the file landed in the upload dir, not anywhere else.
    let entries: Vec<_> = std::fs::read_dir(&server.upload_dir)
        .expect("upload dir unreadable")
        .collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_upload_without_image_field_is_rejected() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let form = Form::new().text("note", "no file here");
    let resp = client
        .post(server.url("/api/upload"))
        .multipart(form)
        .send()
        .await
        .expect("upload request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_with_unusable_filename_is_rejected() {
    let server = TestServer::spawn().await;
    let client = client();
    login(&client, &server).await;

    let part = Part::bytes(PNG_BYTES.to_vec()).file_name("noextension");
    let form = Form::new().part("image", part);

    let resp = client
        .post(server.url("/api/upload"))
        .multipart(form)
        .send()
        .await
        .expect("upload request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
