//! Folder operations: create, list, share and get shares.

use reqwest::Method;
use serde_json::Value;
use shade_core::models::{
    AllowedAction, CreateDirectoryRequest, CreateFolderResult, CreateShareRequest,
};
use shade_core::{join_folder_path, strip_drive_prefix, ShadeResult};

use crate::{encode, ApiClient};

fn shares_path(drive_id: &str) -> String {
    format!("workspaces/drives/{}/public-file-shares", encode(drive_id))
}

impl ApiClient {
    /// Create `folder_name` under `path`. The status in the result is always 201.
    pub async fn create_folder(
        &self,
        drive_id: &str,
        path: &str,
        folder_name: &str,
    ) -> ShadeResult<CreateFolderResult> {
        let full_path = join_folder_path(path, folder_name);
        let body = CreateDirectoryRequest {
            path: full_path.clone(),
            drive_id: drive_id.to_string(),
        };

        let _: Value = self.post_json("files/directory", &body).await?;
        tracing::info!(drive_id = %drive_id, path = %full_path, "Folder created");

        Ok(CreateFolderResult {
            path: full_path,
            status: 201,
        })
    }

    /// List the children of a folder through the filesystem host.
    pub async fn list_folder(&self, drive_id: &str, path: &str) -> ShadeResult<Value> {
        let relative = strip_drive_prefix(path, drive_id);
        let fs_token = self.fetch_fs_token(drive_id).await?;

        self.fs_request(
            Method::GET,
            &format!("{}/fs/listdir", encode(drive_id)),
            &fs_token,
            None,
            &[("path", relative.to_string())],
        )
        .await
    }

    /// Create a share link for a folder or asset path.
    pub async fn create_share(
        &self,
        drive_id: &str,
        path: &str,
        name: &str,
        allowed_actions: &[AllowedAction],
        public_enabled: bool,
    ) -> ShadeResult<Value> {
        let body = CreateShareRequest {
            path: path.to_string(),
            allowed_actions: allowed_actions.to_vec(),
            is_public_enabled: public_enabled,
            name: name.to_string(),
        };

        self.post_json(&shares_path(drive_id), &body).await
    }

    /// Share links of a folder or asset path.
    pub async fn get_shares(&self, drive_id: &str, path: &str) -> ShadeResult<Value> {
        self.get(&shares_path(drive_id), &[("path", path.to_string())])
            .await
    }
}
