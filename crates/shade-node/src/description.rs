//! Registration metadata of the node.

use serde::Serialize;

use crate::operation::{AssetOperation, FolderOperation, RESOURCE_ASSET, RESOURCE_FOLDER};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescription {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescription {
    pub name: String,
    pub value: String,
    pub operations: Vec<OperationDescription>,
}

/// What a host shows when registering the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub version: u32,
    /// Credential type the host must provide
    pub credential: String,
    /// Methods accepted by `list_search`
    pub list_search_methods: Vec<String>,
    pub resources: Vec<ResourceDescription>,
}

impl NodeDescription {
    pub fn resource(&self, value: &str) -> Option<&ResourceDescription> {
        self.resources.iter().find(|r| r.value == value)
    }
}

fn resource(name: &str, value: &str, operations: &[(&str, &str)]) -> ResourceDescription {
    ResourceDescription {
        name: name.to_string(),
        value: value.to_string(),
        operations: operations
            .iter()
            .map(|(value, name)| OperationDescription {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn shade_description(list_search_methods: Vec<String>) -> NodeDescription {
    NodeDescription {
        name: "shade".to_string(),
        display_name: "Shade".to_string(),
        description: "Interact with Shade API".to_string(),
        version: 1,
        credential: "shadeApi".to_string(),
        list_search_methods,
        resources: vec![
            resource("Folder", RESOURCE_FOLDER, FolderOperation::OPERATIONS),
            resource("Asset", RESOURCE_ASSET, AssetOperation::OPERATIONS),
        ],
    }
}
