use serde::{Deserialize, Serialize};

/// Value type of a custom metadata attribute.
///
/// Only the select types matter to this crate; every other type is kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetadataValueType {
    SingleSelect,
    MultiSelect,
    Other(String),
}

impl MetadataValueType {
    pub fn is_select(&self) -> bool {
        matches!(
            self,
            MetadataValueType::SingleSelect | MetadataValueType::MultiSelect
        )
    }
}

impl From<String> for MetadataValueType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "single_select" => MetadataValueType::SingleSelect,
            "multi_select" => MetadataValueType::MultiSelect,
            _ => MetadataValueType::Other(value),
        }
    }
}

impl From<MetadataValueType> for String {
    fn from(value: MetadataValueType) -> Self {
        match value {
            MetadataValueType::SingleSelect => "single_select".to_string(),
            MetadataValueType::MultiSelect => "multi_select".to_string(),
            MetadataValueType::Other(other) => other,
        }
    }
}

/// Custom field defined on a drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    pub id: String,
    pub name: String,
    pub value_type: MetadataValueType,
    #[serde(default)]
    pub options: Option<Vec<MetadataOption>>,
}

/// Selectable option of a select-typed attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataOption {
    pub id: String,
    pub name: String,
}

/// New value of a metadata attribute on an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Free-text scalar in the string form of the attribute type (e.g. `"true"`)
    Text(String),
    /// IDs of the selected options of a select attribute
    Options(Vec<String>),
}

/// Body of `POST /assets/{asset_id}/metadata/{attribute_id}/value`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMetadataValueRequest {
    pub metadata_attribute_value: MetadataValue,
    pub drive_id: String,
}
