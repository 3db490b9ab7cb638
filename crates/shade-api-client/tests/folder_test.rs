mod helpers;

use helpers::{TestServers, API_KEY, FS_TOKEN};
use mockito::Matcher;
use serde_json::json;
use shade_core::models::{AllowedAction, CreateFolderResult};

#[tokio::test]
async fn test_create_folder_under_drive_path() {
    let mut servers = TestServers::start().await;
    let mock = servers
        .api
        .mock("POST", "/files/directory")
        .match_header("authorization", API_KEY)
        .match_body(Matcher::Json(
            json!({"path": "/driveA/2024/Reports", "drive_id": "driveA"}),
        ))
        .with_status(200)
        .with_body(r#"{"something":"else"}"#)
        .create_async()
        .await;

    let result = servers
        .client()
        .create_folder("driveA", "/driveA/2024", "Reports")
        .await
        .unwrap();

    assert_eq!(
        result,
        CreateFolderResult {
            path: "/driveA/2024/Reports".to_string(),
            status: 201
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_folder_failure_propagates() {
    let mut servers = TestServers::start().await;
    servers
        .api
        .mock("POST", "/files/directory")
        .with_status(409)
        .with_body("already exists")
        .create_async()
        .await;

    let err = servers
        .client()
        .create_folder("driveA", "/driveA", "Reports")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn test_list_folder_strips_drive_prefix_and_uses_fs_token() {
    let mut servers = TestServers::start().await;
    let token_mock = servers.mock_fs_token("driveA").await;
    let list_mock = servers
        .fs
        .mock("GET", "/driveA/fs/listdir")
        .match_query(Matcher::UrlEncoded("path".into(), "2024/q1".into()))
        .match_header("authorization", format!("Bearer {}", FS_TOKEN).as_str())
        .with_status(200)
        .with_body(r#"[{"name":"cut.mov","type":"file"}]"#)
        .create_async()
        .await;

    let listing = servers
        .client()
        .list_folder("driveA", "/driveA/2024/q1")
        .await
        .unwrap();

    assert_eq!(listing, json!([{"name": "cut.mov", "type": "file"}]));
    token_mock.assert_async().await;
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_list_folder_keeps_path_without_prefix() {
    let mut servers = TestServers::start().await;
    servers.mock_fs_token("driveA").await;
    let list_mock = servers
        .fs
        .mock("GET", "/driveA/fs/listdir")
        .match_query(Matcher::UrlEncoded("path".into(), "/other/dir".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    servers
        .client()
        .list_folder("driveA", "/other/dir")
        .await
        .unwrap();
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_list_folder_token_failure_skips_listing() {
    let mut servers = TestServers::start().await;
    servers
        .api
        .mock("GET", "/workspaces/drives/driveA/shade-fs-token")
        .with_status(403)
        .create_async()
        .await;
    let list_mock = servers
        .fs
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = servers
        .client()
        .list_folder("driveA", "/driveA/x")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    list_mock.assert_async().await;
}

#[tokio::test]
async fn test_create_share() {
    let mut servers = TestServers::start().await;
    let mock = servers
        .api
        .mock("POST", "/workspaces/drives/driveA/public-file-shares")
        .match_body(Matcher::Json(json!({
            "path": "/driveA/2024",
            "allowed_actions": ["read", "download"],
            "is_public_enabled": false,
            "name": "Client review"
        })))
        .with_status(200)
        .with_body(r#"{"id":"share-1","url":"https://share.shade.inc/abc"}"#)
        .create_async()
        .await;

    let share = servers
        .client()
        .create_share(
            "driveA",
            "/driveA/2024",
            "Client review",
            &[AllowedAction::Read, AllowedAction::Download],
            false,
        )
        .await
        .unwrap();

    assert_eq!(share["id"], "share-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_shares_passes_path_query() {
    let mut servers = TestServers::start().await;
    let mock = servers
        .api
        .mock("GET", "/workspaces/drives/driveA/public-file-shares")
        .match_query(Matcher::UrlEncoded("path".into(), "/driveA/2024".into()))
        .with_status(200)
        .with_body(r#"[{"id":"share-1"}]"#)
        .create_async()
        .await;

    let shares = servers
        .client()
        .get_shares("driveA", "/driveA/2024")
        .await
        .unwrap();

    assert_eq!(shares, json!([{"id": "share-1"}]));
    mock.assert_async().await;
}
