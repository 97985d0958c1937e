//! StorageClientの統合テスト

use std::path::Path;

use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vision_client::storage::StorageClient;
use vision_client_common::error::StorageError;

use crate::support::{fixtures, store, test_config};

fn client_for(server: &MockServer) -> StorageClient {
    let config = test_config(&server.uri(), &server.uri());
    StorageClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_upload_assigns_key_and_etag() {
    let server = MockServer::start().await;
    store::mount_store(&server, "vision-fixtures").await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("scene.jpg");
    fixtures::write_stub(&file);

    let client = client_for(&server);
    let uploaded = client.upload(&file, "fixtures/run-1").await.unwrap();

    assert_eq!(uploaded.key, "fixtures/run-1/scene.jpg");
    assert_eq!(
        uploaded.etag.as_deref(),
        Some("d41d8cd98f00b204e9800998ecf8427e")
    );
}

#[tokio::test]
async fn test_upload_multiple_preserves_input_order() {
    let server = MockServer::start().await;
    store::mount_store(&server, "vision-fixtures").await;

    let dir = TempDir::new().unwrap();
    let names = ["a.jpg", "b.jpg", "c.jpg"];
    let paths: Vec<_> = names.iter().map(|n| dir.path().join(n)).collect();
    for p in &paths {
        fixtures::write_stub(p);
    }
    let refs: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();

    let client = client_for(&server);
    let uploaded = client.upload_multiple(&refs, "batch").await.unwrap();

    // 後段はn番目のアップロード結果を位置で参照するため、順序は契約
    let keys: Vec<_> = uploaded.iter().map(|u| u.key.as_str()).collect();
    assert_eq!(keys, vec!["batch/a.jpg", "batch/b.jpg", "batch/c.jpg"]);
}

#[tokio::test]
async fn test_upload_multiple_rejects_empty_input() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client.upload_multiple(&[], "batch").await;
    assert!(matches!(result, Err(StorageError::Common(_))));
}

#[tokio::test]
async fn test_upload_unreadable_file_fails() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client
        .upload(Path::new("/nonexistent/scene.jpg"), "fixtures")
        .await;
    assert!(matches!(result, Err(StorageError::FixtureRead { .. })));
}

#[tokio::test]
async fn test_upload_surfaces_store_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path_regex("^/vision-fixtures/.+"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("scene.jpg");
    fixtures::write_stub(&file);

    let client = client_for(&server);
    let result = client.upload(&file, "fixtures").await;

    match result {
        Err(StorageError::Status { status, key, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(key, "fixtures/scene.jpg");
        }
        other => panic!("expected Status error, got {:?}", other.map(|u| u.key)),
    }
}

#[tokio::test]
async fn test_upload_error_with_multibyte_body_is_truncated_safely() {
    let server = MockServer::start().await;
    // 切り詰め上限(200バイト)が「é」の途中に落ちるボディ
    let mut body = "x".repeat(199);
    body.push('é');
    body.push_str(&"y".repeat(50));
    Mock::given(method("PUT"))
        .and(path_regex("^/vision-fixtures/.+"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("scene.jpg");
    fixtures::write_stub(&file);

    let client = client_for(&server);
    let result = client.upload(&file, "fixtures").await;

    match result {
        Err(StorageError::Status {
            status, message, ..
        }) => {
            assert_eq!(status, 500);
            assert_eq!(message, format!("{}...", "x".repeat(199)));
        }
        other => panic!("expected Status error, got {:?}", other.map(|u| u.key)),
    }
}

#[tokio::test]
async fn test_delete_object_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/vision-fixtures/fixtures/run-1/scene.jpg"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .delete_object("fixtures/run-1/scene.jpg")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_missing_object_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex("^/vision-fixtures/.+"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.delete_object("fixtures/gone.jpg").await.is_ok());
}
