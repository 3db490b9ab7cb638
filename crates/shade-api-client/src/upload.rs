//! Multipart asset upload.
//!
//! The upload runs as a fixed sequence against the filesystem host:
//!
//! 1. fetch a drive-scoped filesystem token from the API host
//! 2. initiate the multipart upload, which returns a finish token
//! 3. for each 5 MiB part, in order: ask for a presigned URL, PUT the bytes,
//!    keep the returned `ETag`
//! 4. complete the upload with every `{PartNumber, ETag}` pair
//!
//! Any failure aborts the whole upload. Nothing is resumed or retried, and
//! parts already stored are left for the server to expire.

use bytes::Bytes;
use reqwest::Method;
use serde_json::Value;
use shade_core::constants::MULTIPART_PART_SIZE;
use shade_core::models::{
    CompleteMultipartRequest, InitiateMultipartRequest, InitiateMultipartResponse,
    PresignedPartResponse, UploadResult, UploadSession,
};
use shade_core::{normalize_upload_path, plan_parts, total_parts, ShadeError, ShadeResult};

use crate::{encode, ApiClient};

impl ApiClient {
    /// Upload `data` as `file_name` into the folder `path` of a drive.
    ///
    /// A 0-byte payload or a blank file name is rejected before any request is made.
    pub async fn upload_asset(
        &self,
        drive_id: &str,
        path: &str,
        file_name: &str,
        data: Bytes,
    ) -> ShadeResult<UploadResult> {
        if file_name.trim().is_empty() {
            return Err(ShadeError::validation("File name is required for upload"));
        }
        if data.is_empty() {
            return Err(ShadeError::validation("Cannot upload an empty file"));
        }

        let fs_token = self.fetch_fs_token(drive_id).await?;
        let final_path = normalize_upload_path(path, drive_id, file_name);

        let finish_token = self
            .initiate_multipart(drive_id, &fs_token, &final_path)
            .await?;

        let file_size = data.len() as u64;
        let mut session = UploadSession {
            drive_id: drive_id.to_string(),
            final_path,
            fs_token,
            finish_token,
            part_size: MULTIPART_PART_SIZE,
            total_parts: total_parts(file_size, MULTIPART_PART_SIZE),
            completed_parts: Vec::new(),
        };

        tracing::info!(
            drive_id = %drive_id,
            path = %session.final_path,
            file_size,
            total_parts = session.total_parts,
            "Multipart upload initiated"
        );

        for part in plan_parts(file_size, session.part_size) {
            let url = self.request_part_url(&session, part.part_number).await?;
            let chunk = data.slice(part.start as usize..part.end as usize);
            let etag = self.put_part(&url, chunk).await?;

            tracing::debug!(
                part_number = part.part_number,
                total_parts = session.total_parts,
                size = part.len(),
                "Uploaded part"
            );
            session.record_part(part.part_number, etag);
        }

        self.complete_multipart(&session).await?;

        tracing::info!(
            drive_id = %drive_id,
            path = %session.final_path,
            "Multipart upload completed"
        );

        Ok(UploadResult {
            status: "Success".to_string(),
            path: session.final_path,
            name: file_name.to_string(),
        })
    }

    async fn initiate_multipart(
        &self,
        drive_id: &str,
        fs_token: &str,
        final_path: &str,
    ) -> ShadeResult<String> {
        let body = InitiateMultipartRequest {
            path: final_path.to_string(),
            part_size: MULTIPART_PART_SIZE,
        };

        let response = self
            .fs_request(
                Method::POST,
                &format!("{}/upload/multipart", encode(drive_id)),
                fs_token,
                Some(serde_json::to_value(&body)?),
                &[],
            )
            .await?;

        let response: InitiateMultipartResponse = serde_json::from_value(response)?;
        response
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ShadeError::validation("Multipart upload initiation returned no token"))
    }

    async fn request_part_url(
        &self,
        session: &UploadSession,
        part_number: u32,
    ) -> ShadeResult<String> {
        let response = self
            .fs_request(
                Method::POST,
                &format!(
                    "{}/upload/multipart/part/{}",
                    encode(&session.drive_id),
                    part_number
                ),
                &session.fs_token,
                None,
                &[("token", session.finish_token.clone())],
            )
            .await?;

        let response: PresignedPartResponse = serde_json::from_value(response)?;
        response.url.filter(|u| !u.is_empty()).ok_or_else(|| {
            ShadeError::validation(format!("No presigned URL returned for part {}", part_number))
        })
    }

    async fn complete_multipart(&self, session: &UploadSession) -> ShadeResult<Value> {
        if !session.is_complete() {
            return Err(ShadeError::validation(format!(
                "Cannot complete upload: {} of {} parts have an ETag",
                session.completed_parts.len(),
                session.total_parts
            )));
        }

        let body = CompleteMultipartRequest {
            parts: session.completed_parts.clone(),
        };

        self.fs_request(
            Method::POST,
            &format!("{}/upload/multipart/complete", encode(&session.drive_id)),
            &session.fs_token,
            Some(serde_json::to_value(&body)?),
            &[("token", session.finish_token.clone())],
        )
        .await
    }
}
