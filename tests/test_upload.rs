#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};

fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE,
        0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00,
        0x00, 0x02, 0x00, 0x01, 0xE2, 0x21, 0xBC, 0x33,
        0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, // IEND chunk
        0xAE, 0x42, 0x60, 0x82,
    ]
}

fn png_form(name: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(png_bytes()).file_name(name).mime_type("image/png"),
    )
}

#[tokio::test]
async fn upload_serve_and_delete_image() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let response = admin
        .post("/api/v1/admin/upload/blogs")
        .multipart(png_form("Cover Photo.PNG"))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let url = body["url"].as_str().unwrap().to_string();
    let key = body["key"].as_str().unwrap();
    assert!(url.starts_with("/api/v1/image/blogs/"), "got {url}");
    assert!(url.ends_with(".png"), "got {url}");
    assert!(key.starts_with("blogs/"));

    let served = admin.get(&url).await;
    served.assert_status_ok();
    assert_eq!(served.header("content-type"), "image/png");
    assert_eq!(
        served.header("cache-control"),
        "public, max-age=31536000, immutable"
    );
    assert_eq!(served.as_bytes().to_vec(), png_bytes());

    let file = url.rsplit('/').next().unwrap();
    admin
        .delete(&format!("/api/v1/admin/image/blogs/{file}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    admin.get(&url).await.assert_status_not_found();
}

#[tokio::test]
async fn image_dropped_before_submit_is_not_referenced() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let uploaded: serde_json::Value = admin
        .post("/api/v1/admin/upload/blogs")
        .multipart(png_form("cover.png"))
        .await
        .json();
    let url = uploaded["url"].as_str().unwrap().to_string();

    // The editor cleared the image, so the payload carries no `imageUrl`.
    let created = admin
        .post("/api/v1/admin/blogs")
        .json(&common::blog_payload("Without cover", &[]))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<serde_json::Value>()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let stored: serde_json::Value = admin.get(&format!("/api/v1/blogs/{id}")).await.json();
    assert_eq!(stored["source"].as_str(), Some("store"));
    assert!(stored["entry"]["imageUrl"].is_null());

    // The blob is left in place.
    admin.get(&url).await.assert_status_ok();
}

#[tokio::test]
async fn upload_names_do_not_collide() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let first: serde_json::Value = admin
        .post("/api/v1/admin/upload/services")
        .multipart(png_form("logo.png"))
        .await
        .json();
    let second: serde_json::Value = admin
        .post("/api/v1/admin/upload/services")
        .multipart(png_form("logo.png"))
        .await
        .json();
    assert_ne!(first["key"], second["key"]);
}

#[tokio::test]
async fn upload_without_extension_keeps_image_type() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let body: serde_json::Value = admin
        .post("/api/v1/admin/upload/services")
        .multipart(png_form("pasted-image"))
        .await
        .json();
    let url = body["url"].as_str().unwrap();
    assert!(url.ends_with(".png"), "got {url}");

    let served = admin.get(url).await;
    served.assert_status_ok();
    assert_eq!(served.header("content-type"), "image/png");
}

#[tokio::test]
async fn upload_requires_session() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    server
        .post("/api/v1/admin/upload/blogs")
        .multipart(png_form("cover.png"))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn upload_rejects_non_image() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"hello world".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    admin
        .post("/api/v1/admin/upload/blogs")
        .multipart(form)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn upload_missing_file_field() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    let form = MultipartForm::new().add_part(
        "attachment",
        Part::bytes(png_bytes()).file_name("cover.png").mime_type("image/png"),
    );
    admin
        .post("/api/v1/admin/upload/blogs")
        .multipart(form)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn unknown_namespace_is_not_found() {
    let env = common::TestEnv::start().await;
    let admin = env.admin_server().await;

    admin
        .post("/api/v1/admin/upload/avatars")
        .multipart(png_form("me.png"))
        .await
        .assert_status_not_found();
    admin
        .get("/api/v1/image/services/missing.png")
        .await
        .assert_status_not_found();
    admin
        .delete("/api/v1/admin/image/services/missing.png")
        .await
        .assert_status_not_found();
}
