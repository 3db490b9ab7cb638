use bytes::Bytes;
use serde_json::Value;
use shade_api_client::ApiClient;
use shade_core::constants::{DEFAULT_BINARY_PROPERTY, DEFAULT_SEARCH_LIMIT};
use shade_core::models::{MetadataValue, TranscriptionFormat};
use shade_core::{ShadeError, ShadeResult};
use validator::Validate;

use super::{PathArgs, ShareArgs, RESOURCE_ASSET};
use crate::locator::{resolve_attribute, ResourceLocator};
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AssetArgs {
    #[validate(length(min = 1, message = "Asset ID must not be empty"))]
    pub asset_id: String,
}

impl AssetArgs {
    fn parse(params: &Params<'_>) -> ShadeResult<Self> {
        let args = Self {
            asset_id: params.string("assetId")?,
        };
        args.validate()?;
        Ok(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CommentArgs {
    #[validate(length(min = 1, message = "Asset ID must not be empty"))]
    pub asset_id: String,
    #[validate(length(min = 1, message = "Comment must not be empty"))]
    pub comment: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct TranscriptionArgs {
    #[validate(length(min = 1, message = "Asset ID must not be empty"))]
    pub asset_id: String,
    pub format: TranscriptionFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SearchArgs {
    #[validate(length(min = 1, message = "Search query must not be empty"))]
    pub query: String,
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UpdateMetadataArgs {
    #[validate(length(min = 1, message = "Asset ID must not be empty"))]
    pub asset_id: String,
    pub attribute: ResourceLocator,
    pub value: MetadataValue,
}

impl UpdateMetadataArgs {
    /// A non-empty `value` wins over the selected `metadataAttributeOption` IDs.
    fn parse(params: &Params<'_>) -> ShadeResult<Self> {
        let text = params.string_or("value", "")?;
        let value = if !text.is_empty() {
            MetadataValue::Text(text)
        } else {
            let options = params.string_list("metadataAttributeOption")?;
            if options.is_empty() {
                return Err(ShadeError::validation(
                    "Either 'value' or 'metadataAttributeOption' must be set",
                ));
            }
            MetadataValue::Options(options)
        };

        let args = Self {
            asset_id: params.string("assetId")?,
            attribute: params.required_locator("metadataAttribute")?,
            value,
        };
        args.validate()?;
        Ok(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UploadArgs {
    /// Destination folder; may start with the drive ID
    pub path: String,
    #[validate(length(min = 1, message = "File name must not be empty"))]
    pub file_name: String,
    pub data: Bytes,
}

impl UploadArgs {
    /// Takes the payload from the binary property of the current item.
    /// An empty `fileName` falls back to the file name of the binary.
    fn parse(params: &Params<'_>) -> ShadeResult<Self> {
        let property = params.string_or("binaryProperty", DEFAULT_BINARY_PROPERTY)?;
        let binary = params
            .context()
            .items()
            .get(params.index())
            .and_then(|item| item.binary.get(&property))
            .ok_or_else(|| {
                ShadeError::validation(format!(
                    "No binary data found in property: {}",
                    property
                ))
            })?;

        let mut file_name = params.string_or("fileName", "")?;
        if file_name.is_empty() {
            file_name = binary.file_name.clone().unwrap_or_default();
        }

        let args = Self {
            path: params.string_or("path", "")?,
            file_name,
            data: binary.data.clone(),
        };
        args.validate()?;
        Ok(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOperation {
    Comment(CommentArgs),
    Get(AssetArgs),
    GetComments(AssetArgs),
    GetShares(PathArgs),
    GetTranscription(TranscriptionArgs),
    Search(SearchArgs),
    Share(ShareArgs),
    Update(UpdateMetadataArgs),
    Upload(UploadArgs),
}

impl AssetOperation {
    /// `(value, display name)` of every asset operation
    pub const OPERATIONS: &'static [(&'static str, &'static str)] = &[
        ("comment", "Comment"),
        ("get", "Get"),
        ("get_comments", "Get Comments"),
        ("get_shares", "Get Shares"),
        ("get_transcription", "Get Transcription"),
        ("search", "Search"),
        ("share", "Share"),
        ("update", "Update"),
        ("upload", "Upload"),
    ];

    pub fn parse(params: &Params<'_>, operation: &str) -> ShadeResult<Self> {
        let op = match operation {
            "comment" => {
                let args = CommentArgs {
                    asset_id: params.string("assetId")?,
                    comment: params.string("comment")?,
                    is_public: params.bool_or("public", true)?,
                };
                args.validate()?;
                Self::Comment(args)
            }
            "get" => Self::Get(AssetArgs::parse(params)?),
            "get_comments" => Self::GetComments(AssetArgs::parse(params)?),
            "get_shares" => Self::GetShares(PathArgs {
                path: params.string("path")?,
            }),
            "get_transcription" => {
                let args = TranscriptionArgs {
                    asset_id: params.string("assetId")?,
                    format: params
                        .string_or("format", TranscriptionFormat::default().as_str())?
                        .parse()?,
                };
                args.validate()?;
                Self::GetTranscription(args)
            }
            "search" => {
                let args = SearchArgs {
                    query: params.string("query")?,
                    limit: params.u32_or("limit", DEFAULT_SEARCH_LIMIT)?,
                };
                args.validate()?;
                Self::Search(args)
            }
            "share" => Self::Share(ShareArgs::parse(params)?),
            "update" => Self::Update(UpdateMetadataArgs::parse(params)?),
            "upload" => Self::Upload(UploadArgs::parse(params)?),
            other => return Err(ShadeError::unknown_operation(RESOURCE_ASSET, other)),
        };
        Ok(op)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Comment(_) => "comment",
            Self::Get(_) => "get",
            Self::GetComments(_) => "get_comments",
            Self::GetShares(_) => "get_shares",
            Self::GetTranscription(_) => "get_transcription",
            Self::Search(_) => "search",
            Self::Share(_) => "share",
            Self::Update(_) => "update",
            Self::Upload(_) => "upload",
        }
    }

    pub async fn run(self, client: &ApiClient, drive_id: &str) -> ShadeResult<Value> {
        match self {
            Self::Comment(args) => {
                client
                    .comment_on_asset(drive_id, &args.asset_id, &args.comment, args.is_public)
                    .await
            }
            Self::Get(args) => client.get_asset(drive_id, &args.asset_id).await,
            Self::GetComments(args) => client.get_asset_comments(drive_id, &args.asset_id).await,
            Self::GetShares(args) => client.get_shares(drive_id, &args.path).await,
            Self::GetTranscription(args) => {
                client
                    .get_asset_transcription(drive_id, &args.asset_id, args.format)
                    .await
            }
            Self::Search(args) => {
                client
                    .search_assets(drive_id, &args.query, Some(args.limit))
                    .await
            }
            Self::Share(args) => args.run(client, drive_id).await,
            Self::Update(args) => {
                let attribute_id = resolve_attribute(client, drive_id, &args.attribute).await?;
                client
                    .update_asset_metadata(drive_id, &args.asset_id, &attribute_id, args.value)
                    .await
            }
            Self::Upload(args) => {
                let result = client
                    .upload_asset(drive_id, &args.path, &args.file_name, args.data)
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
        }
    }
}
