use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShadeError;

/// Permission granted by a share link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedAction {
    Comment,
    Download,
    EditMetadata,
    /// Upload into the shared location
    Edit,
    /// View
    Read,
    /// View metadata
    ReadAssetDetails,
}

impl AllowedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowedAction::Comment => "comment",
            AllowedAction::Download => "download",
            AllowedAction::EditMetadata => "edit_metadata",
            AllowedAction::Edit => "edit",
            AllowedAction::Read => "read",
            AllowedAction::ReadAssetDetails => "read_asset_details",
        }
    }
}

impl fmt::Display for AllowedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllowedAction {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comment" => Ok(AllowedAction::Comment),
            "download" => Ok(AllowedAction::Download),
            "edit_metadata" => Ok(AllowedAction::EditMetadata),
            "edit" => Ok(AllowedAction::Edit),
            "read" => Ok(AllowedAction::Read),
            "read_asset_details" => Ok(AllowedAction::ReadAssetDetails),
            other => Err(ShadeError::validation(format!(
                "Unknown share action: {}",
                other
            ))),
        }
    }
}

/// Body of `POST /workspaces/drives/{drive_id}/public-file-shares`
#[derive(Debug, Clone, Serialize)]
pub struct CreateShareRequest {
    pub path: String,
    pub allowed_actions: Vec<AllowedAction>,
    pub is_public_enabled: bool,
    pub name: String,
}
