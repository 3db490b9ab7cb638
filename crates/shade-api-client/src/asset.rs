//! Asset operations: comments, details, transcription, search and metadata updates.
//!
//! Shares of an asset go through [`ApiClient::create_share`] and
//! [`ApiClient::get_shares`] with the asset path; upload lives in
//! [`crate::upload`].

use serde_json::{json, Value};
use shade_core::models::{
    AssetSearchRequest, CreateCommentRequest, MetadataValue, TranscriptionFormat,
    UpdateMetadataValueRequest,
};
use shade_core::ShadeResult;
use validator::Validate;

use crate::{encode, ApiClient};

impl ApiClient {
    pub async fn comment_on_asset(
        &self,
        drive_id: &str,
        asset_id: &str,
        comment: &str,
        is_public: bool,
    ) -> ShadeResult<Value> {
        let body = CreateCommentRequest {
            is_public,
            comment: comment.to_string(),
            drive_id: drive_id.to_string(),
            url: String::new(),
        };

        self.post_json(&format!("assets/{}/comments", encode(asset_id)), &body)
            .await
    }

    pub async fn get_asset(&self, drive_id: &str, asset_id: &str) -> ShadeResult<Value> {
        self.get(
            &format!("assets/{}", encode(asset_id)),
            &[("drive_id", drive_id.to_string())],
        )
        .await
    }

    pub async fn get_asset_comments(&self, drive_id: &str, asset_id: &str) -> ShadeResult<Value> {
        self.get(
            &format!("assets/{}/comments", encode(asset_id)),
            &[("drive_id", drive_id.to_string())],
        )
        .await
    }

    /// Transcription file of an asset, wrapped as `{data: <response>}`.
    pub async fn get_asset_transcription(
        &self,
        drive_id: &str,
        asset_id: &str,
        format: TranscriptionFormat,
    ) -> ShadeResult<Value> {
        let data: Value = self
            .get(
                &format!("assets/{}/transcription/file", encode(asset_id)),
                &[
                    ("drive_id", drive_id.to_string()),
                    ("type", format.as_str().to_string()),
                ],
            )
            .await?;

        Ok(json!({ "data": data }))
    }

    /// Visual/semantic search over a drive. `limit` defaults to 50 and must be at least 1.
    pub async fn search_assets(
        &self,
        drive_id: &str,
        query: &str,
        limit: Option<u32>,
    ) -> ShadeResult<Value> {
        let body = AssetSearchRequest::new(drive_id, query, limit);
        body.validate()?;

        self.post_json("search", &body).await
    }

    /// Set the value of a metadata attribute on an asset.
    pub async fn update_asset_metadata(
        &self,
        drive_id: &str,
        asset_id: &str,
        attribute_id: &str,
        value: MetadataValue,
    ) -> ShadeResult<Value> {
        let body = UpdateMetadataValueRequest {
            metadata_attribute_value: value,
            drive_id: drive_id.to_string(),
        };

        self.post_json(
            &format!(
                "assets/{}/metadata/{}/value",
                encode(asset_id),
                encode(attribute_id)
            ),
            &body,
        )
        .await
    }
}
