use serde::{Deserialize, Serialize};

/// Body of `POST {fs}/{drive_id}/upload/multipart`
#[derive(Debug, Clone, Serialize)]
pub struct InitiateMultipartRequest {
    pub path: String,
    #[serde(rename = "partSize")]
    pub part_size: u64,
}

/// Response of the initiate call. `token` correlates every later part and completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiateMultipartResponse {
    pub token: Option<String>,
}

/// Response of the part call: where to PUT the bytes of that part.
#[derive(Debug, Clone, Deserialize)]
pub struct PresignedPartResponse {
    pub url: Option<String>,
}

/// A part that has been stored, as listed in the completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedPart {
    #[serde(rename = "PartNumber")]
    pub part_number: u32,
    #[serde(rename = "ETag")]
    pub etag: String,
}

/// Body of `POST {fs}/{drive_id}/upload/multipart/complete`
#[derive(Debug, Clone, Serialize)]
pub struct CompleteMultipartRequest {
    pub parts: Vec<CompletedPart>,
}

/// State of one multipart upload. Lives only for the duration of the upload call.
#[derive(Debug)]
pub struct UploadSession {
    pub drive_id: String,
    pub final_path: String,
    pub fs_token: String,
    pub finish_token: String,
    pub part_size: u64,
    pub total_parts: u32,
    pub completed_parts: Vec<CompletedPart>,
}

impl UploadSession {
    /// Record the ETag of the next part. Parts must arrive in order.
    pub fn record_part(&mut self, part_number: u32, etag: String) {
        debug_assert_eq!(part_number as usize, self.completed_parts.len() + 1);
        self.completed_parts.push(CompletedPart { part_number, etag });
    }

    /// True once every part from 1 to `total_parts` has an ETag.
    pub fn is_complete(&self) -> bool {
        self.completed_parts.len() == self.total_parts as usize
            && self
                .completed_parts
                .iter()
                .enumerate()
                .all(|(i, part)| part.part_number as usize == i + 1 && !part.etag.is_empty())
    }
}

/// Result of a finished upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub status: String,
    pub path: String,
    pub name: String,
}
