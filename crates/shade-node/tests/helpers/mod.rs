#![allow(dead_code)]

use mockito::{Server, ServerGuard};
use serde_json::json;
use shade_api_client::ApiClient;
use shade_core::ShadeConfig;
use shade_node::{NodeItem, ShadeNode, StaticContext};

pub const API_KEY: &str = "sk-node-test";
pub const FS_TOKEN: &str = "fs-node-token";

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

    pub fn node(&self) -> ShadeNode {
        let client = ApiClient::new(
            ShadeConfig::new(API_KEY)
                .with_api_base_url(self.api.url())
                .with_fs_base_url(self.fs.url()),
        )
        .expect("client should build");
        ShadeNode::new(client)
    }

    pub async fn mock_fs_token(&mut self, drive_id: &str) -> mockito::Mock {
        self.api
            .mock(
                "GET",
                format!("/workspaces/drives/{}/shade-fs-token", drive_id).as_str(),
            )
            .with_status(200)
            .with_body(format!("\"{}\"", FS_TOKEN))
            .create_async()
            .await
    }
}

/// Context with `count` empty items targeting `driveA`
pub fn drive_context(count: usize, resource: &str, operation: &str) -> StaticContext {
    StaticContext::new(vec![NodeItem::default(); count])
        .with_parameter("resource", resource)
        .with_parameter("operation", operation)
        .with_parameter("workspace", json!({"mode": "list", "value": "ws-1"}))
        .with_parameter("drive", json!({"mode": "list", "value": "driveA"}))
}
