use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::error::ShadeError;

/// File format of an asset transcription
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionFormat {
    #[default]
    Vtt,
    Scriptsync,
    Srt,
    Txt,
}

impl TranscriptionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionFormat::Vtt => "vtt",
            TranscriptionFormat::Scriptsync => "scriptsync",
            TranscriptionFormat::Srt => "srt",
            TranscriptionFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for TranscriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptionFormat {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vtt" => Ok(TranscriptionFormat::Vtt),
            "scriptsync" => Ok(TranscriptionFormat::Scriptsync),
            "srt" => Ok(TranscriptionFormat::Srt),
            "txt" => Ok(TranscriptionFormat::Txt),
            other => Err(ShadeError::validation(format!(
                "Unsupported transcription format: {} (expected vtt, scriptsync, srt or txt)",
                other
            ))),
        }
    }
}

/// Body of `POST /assets/{asset_id}/comments`
#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    pub is_public: bool,
    pub comment: String,
    pub drive_id: String,
    /// Always empty; the API requires the field
    pub url: String,
}

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AssetSearchRequest {
    pub drive_id: String,
    #[validate(length(min = 1, message = "Search query must not be empty"))]
    pub query: String,
    #[validate(range(min = 1, message = "Limit must be at least 1"))]
    pub limit: u32,
}

impl AssetSearchRequest {
    pub fn new(drive_id: impl Into<String>, query: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            drive_id: drive_id.into(),
            query: query.into(),
            limit: limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        }
    }
}
