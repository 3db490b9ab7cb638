//! Lookup providers: resolve workspaces, drives and metadata attributes/options
//! to `{label, id}` pairs.
//!
//! A missing parent selection (no workspace for drives, no drive for
//! attributes) yields an empty list rather than an error.

use shade_core::models::{Drive, LookupEntry, MetadataAttribute, Workspace};
use shade_core::ShadeResult;

use crate::{encode, ApiClient};

/// Treat `None` and `""` alike: nothing selected.
fn selected(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

impl ApiClient {
    /// All workspaces visible to the API key.
    pub async fn list_workspaces(&self) -> ShadeResult<Vec<Workspace>> {
        self.get("workspaces", &[]).await
    }

    /// Drives of one workspace.
    pub async fn list_drives(&self, workspace_id: &str) -> ShadeResult<Vec<Drive>> {
        self.get(&format!("workspaces/{}/drives", encode(workspace_id)), &[])
            .await
    }

    /// Metadata attributes defined on a drive.
    pub async fn list_metadata_attributes(
        &self,
        drive_id: &str,
    ) -> ShadeResult<Vec<MetadataAttribute>> {
        self.get(
            &format!("workspaces/drives/{}/metadata", encode(drive_id)),
            &[],
        )
        .await
    }

    pub async fn search_workspaces(&self) -> ShadeResult<Vec<LookupEntry>> {
        let workspaces = self.list_workspaces().await?;
        Ok(workspaces.into_iter().map(LookupEntry::from).collect())
    }

    pub async fn search_drives(&self, workspace_id: Option<&str>) -> ShadeResult<Vec<LookupEntry>> {
        let Some(workspace_id) = selected(workspace_id) else {
            return Ok(Vec::new());
        };

        let drives = self.list_drives(workspace_id).await?;
        Ok(drives.into_iter().map(LookupEntry::from).collect())
    }

    pub async fn search_metadata_attributes(
        &self,
        drive_id: Option<&str>,
    ) -> ShadeResult<Vec<LookupEntry>> {
        let Some(drive_id) = selected(drive_id) else {
            return Ok(Vec::new());
        };

        let attributes = self.list_metadata_attributes(drive_id).await?;
        Ok(attributes.into_iter().map(LookupEntry::from).collect())
    }

    /// Options of a select-typed attribute. Empty when the drive is unset, the
    /// attribute is unknown, not a select type, or has no options.
    pub async fn search_metadata_options(
        &self,
        drive_id: Option<&str>,
        attribute_id: Option<&str>,
    ) -> ShadeResult<Vec<LookupEntry>> {
        let Some(drive_id) = selected(drive_id) else {
            return Ok(Vec::new());
        };

        let attributes = self.list_metadata_attributes(drive_id).await?;
        let attribute = attributes
            .into_iter()
            .find(|attribute| Some(attribute.id.as_str()) == attribute_id);

        let options = match attribute {
            Some(attribute) if attribute.value_type.is_select() => attribute.options,
            _ => None,
        };

        Ok(options
            .unwrap_or_default()
            .into_iter()
            .map(LookupEntry::from)
            .collect())
    }
}
