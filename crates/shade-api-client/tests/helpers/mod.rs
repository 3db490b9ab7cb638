#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use shade_api_client::ApiClient;
use shade_core::ShadeConfig;

pub const API_KEY: &str = "sk-test-key";
pub const FS_TOKEN: &str = "fs-token-123";

/// Mock API host and mock filesystem host
pub struct TestServers {
    pub api: ServerGuard,
    pub fs: ServerGuard,
}

impl TestServers {
    pub async fn start() -> Self {
        Self {
            api: Server::new_async().await,
            fs: Server::new_async().await,
        }
    }

    /// Client pointed at both mock hosts
    pub fn client(&self) -> ApiClient {
        ApiClient::new(
            ShadeConfig::new(API_KEY)
                .with_api_base_url(self.api.url())
                .with_fs_base_url(self.fs.url()),
        )
        .expect("client should build")
    }

    /// Mock the filesystem token endpoint for a drive
    pub async fn mock_fs_token(&mut self, drive_id: &str) -> mockito::Mock {
        self.api
            .mock(
                "GET",
                format!("/workspaces/drives/{}/shade-fs-token", drive_id).as_str(),
            )
            .match_header("authorization", API_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!("\"{}\"", FS_TOKEN))
            .create_async()
            .await
    }
}
