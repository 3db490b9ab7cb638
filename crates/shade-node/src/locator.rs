//! Resource locators for workspace, drive and metadata attribute parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shade_api_client::ApiClient;
use shade_core::models::LookupEntry;
use shade_core::{ShadeError, ShadeResult};

/// How the locator value was entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorMode {
    /// Picked from a lookup list; the value is the ID
    #[default]
    List,
    /// Typed ID
    Id,
    /// Typed display name, resolved through the lookup providers
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLocator {
    #[serde(default)]
    pub mode: LocatorMode,
    #[serde(default)]
    pub value: String,
}

impl ResourceLocator {
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            mode: LocatorMode::Id,
            value: value.into(),
        }
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self {
            mode: LocatorMode::Name,
            value: value.into(),
        }
    }

    /// Accepts `{mode, value}` objects and plain strings (taken as IDs).
    pub fn from_value(param: &str, value: &Value) -> ShadeResult<Self> {
        match value {
            Value::String(id) => Ok(Self::id(id.clone())),
            Value::Object(_) => serde_json::from_value(value.clone()).map_err(|e| {
                ShadeError::validation(format!(
                    "Parameter '{}' is not a valid locator: {}",
                    param, e
                ))
            }),
            _ => Err(ShadeError::validation(format!(
                "Parameter '{}' must be a locator object or a string",
                param
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// ID carried directly by the locator, if it is not a name
    pub fn direct_id(&self) -> Option<&str> {
        match self.mode {
            LocatorMode::List | LocatorMode::Id if !self.is_empty() => Some(&self.value),
            _ => None,
        }
    }
}

/// Resolve a workspace locator to its ID.
pub async fn resolve_workspace(
    client: &ApiClient,
    workspace: &ResourceLocator,
) -> ShadeResult<String> {
    if let Some(id) = direct_or_missing(workspace, "workspace")? {
        return Ok(id);
    }
    let entries = client.search_workspaces().await?;
    find_by_label(entries, "workspace", &workspace.value)
}

/// Resolve a drive locator to its ID. Drive names need the workspace.
pub async fn resolve_drive(
    client: &ApiClient,
    workspace: Option<&ResourceLocator>,
    drive: &ResourceLocator,
) -> ShadeResult<String> {
    if let Some(id) = direct_or_missing(drive, "drive")? {
        return Ok(id);
    }

    let workspace = workspace.filter(|w| !w.is_empty()).ok_or_else(|| {
        ShadeError::validation("Parameter 'workspace' is required to find a drive by name")
    })?;
    let workspace_id = resolve_workspace(client, workspace).await?;
    let entries = client.search_drives(Some(&workspace_id)).await?;
    find_by_label(entries, "drive", &drive.value)
}

/// Resolve a metadata attribute locator to its ID within a drive.
pub async fn resolve_attribute(
    client: &ApiClient,
    drive_id: &str,
    attribute: &ResourceLocator,
) -> ShadeResult<String> {
    if let Some(id) = direct_or_missing(attribute, "metadataAttribute")? {
        return Ok(id);
    }
    let entries = client.search_metadata_attributes(Some(drive_id)).await?;
    find_by_label(entries, "metadata attribute", &attribute.value)
}

fn direct_or_missing(locator: &ResourceLocator, param: &str) -> ShadeResult<Option<String>> {
    if locator.is_empty() {
        return Err(ShadeError::validation(format!(
            "Parameter '{}' is required",
            param
        )));
    }
    Ok(locator.direct_id().map(str::to_string))
}

fn find_by_label(entries: Vec<LookupEntry>, kind: &str, name: &str) -> ShadeResult<String> {
    let mut matches = entries.into_iter().filter(|e| e.label == name);
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.id),
        (Some(_), Some(_)) => Err(ShadeError::validation(format!(
            "More than one {} is named '{}'",
            kind, name
        ))),
        (None, _) => Err(ShadeError::validation(format!(
            "No {} named '{}'",
            kind, name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_object_and_string() {
        let locator =
            ResourceLocator::from_value("drive", &json!({"mode": "list", "value": "driveA"}))
                .unwrap();
        assert_eq!(locator.mode, LocatorMode::List);
        assert_eq!(locator.direct_id(), Some("driveA"));

        let locator = ResourceLocator::from_value("drive", &json!("driveB")).unwrap();
        assert_eq!(locator, ResourceLocator::id("driveB"));

        let locator = ResourceLocator::from_value("drive", &json!({"value": "x"})).unwrap();
        assert_eq!(locator.mode, LocatorMode::List);
    }

    #[test]
    fn test_from_value_rejects_other_shapes() {
        let err = ResourceLocator::from_value("drive", &json!(42)).unwrap_err();
        assert!(matches!(err, ShadeError::Validation(_)));

        let bad_mode = json!({"mode": "url", "value": "x"});
        let err = ResourceLocator::from_value("drive", &bad_mode).unwrap_err();
        assert!(matches!(err, ShadeError::Validation(_)));
    }

    #[test]
    fn test_name_mode_has_no_direct_id() {
        assert_eq!(ResourceLocator::name("Footage").direct_id(), None);
        assert_eq!(ResourceLocator::id("  ").direct_id(), None);
    }

    #[test]
    fn test_find_by_label() {
        let entries = vec![
            LookupEntry::new("Footage", "driveA"),
            LookupEntry::new("Archive", "driveB"),
            LookupEntry::new("Archive", "driveC"),
        ];

        assert_eq!(
            find_by_label(entries.clone(), "drive", "Footage").unwrap(),
            "driveA"
        );
        assert!(find_by_label(entries.clone(), "drive", "Archive").is_err());
        let err = find_by_label(entries, "drive", "Missing").unwrap_err();
        assert!(err.to_string().contains("No drive named 'Missing'"));
    }
}
