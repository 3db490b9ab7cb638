use serde::{Deserialize, Serialize};

/// Body of `POST /files/directory`
#[derive(Debug, Clone, Serialize)]
pub struct CreateDirectoryRequest {
    pub path: String,
    pub drive_id: String,
}

/// Result of folder creation. `status` is always 201; the response body is not read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderResult {
    pub path: String,
    pub status: u16,
}
