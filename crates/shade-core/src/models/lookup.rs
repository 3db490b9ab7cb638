use serde::{Deserialize, Serialize};

use super::{Drive, MetadataAttribute, MetadataOption, Workspace};

/// A `{label, id}` pair offered to the user when picking a value from a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub label: String,
    pub id: String,
}

impl LookupEntry {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

impl From<Workspace> for LookupEntry {
    fn from(workspace: Workspace) -> Self {
        Self::new(workspace.name, workspace.id)
    }
}

impl From<Drive> for LookupEntry {
    fn from(drive: Drive) -> Self {
        Self::new(drive.name, drive.id)
    }
}

impl From<MetadataAttribute> for LookupEntry {
    fn from(attribute: MetadataAttribute) -> Self {
        Self::new(attribute.name, attribute.id)
    }
}

impl From<MetadataOption> for LookupEntry {
    fn from(option: MetadataOption) -> Self {
        Self::new(option.name, option.id)
    }
}
