//! The Shade node and the trait hosts dispatch through.

use std::fmt::Debug;
use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};
use shade_api_client::ApiClient;
use shade_core::models::LookupEntry;
use shade_core::{ErrorMetadata, LogLevel, ShadeError, ShadeResult};

use crate::context::ExecuteContext;
use crate::description::{shade_description, NodeDescription};
use crate::locator::{resolve_attribute, resolve_drive, resolve_workspace, ResourceLocator};
use crate::operation::OperationRequest;

/// Link from an output record back to the input item it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairedItem {
    pub item: usize,
}

/// One output record per input item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOutput {
    pub json: Value,
    pub paired_item: PairedItem,
}

impl NodeOutput {
    pub fn new(json: Value, item: usize) -> Self {
        Self {
            json,
            paired_item: PairedItem { item },
        }
    }

    pub fn error(err: &ShadeError, item: usize) -> Self {
        Self::new(json!({ "error": err.detailed_message() }), item)
    }

    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }
}

/// Lookup method a host calls to fill a resource locator list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMethod {
    WorkspaceSearch,
    DriveSearch,
    MetadataSearch,
    MetadataOptionSearch,
}

impl LookupMethod {
    pub const ALL: [LookupMethod; 4] = [
        LookupMethod::WorkspaceSearch,
        LookupMethod::DriveSearch,
        LookupMethod::MetadataSearch,
        LookupMethod::MetadataOptionSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMethod::WorkspaceSearch => "workspaceSearch",
            LookupMethod::DriveSearch => "driveSearch",
            LookupMethod::MetadataSearch => "metadataSearch",
            LookupMethod::MetadataOptionSearch => "metadataOptionSearch",
        }
    }
}

impl FromStr for LookupMethod {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LookupMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ShadeError::unknown_operation("listSearch", s))
    }
}

/// Trait a host uses to run a node
#[async_trait]
pub trait Node: Send + Sync + Debug {
    /// Node identifier
    fn name(&self) -> &str;

    fn description(&self) -> NodeDescription;

    /// Run every input item. Fails only when an item fails and continue-on-fail is off.
    async fn execute(&self, ctx: &dyn ExecuteContext) -> ShadeResult<Vec<NodeOutput>>;

    /// Entries for a lookup list given the parameters entered so far
    async fn list_search(&self, method: &str, params: &Value) -> ShadeResult<Vec<LookupEntry>>;
}

#[derive(Debug, Clone)]
pub struct ShadeNode {
    client: ApiClient,
}

impl ShadeNode {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Node with a client configured from the environment
    pub fn from_env() -> ShadeResult<Self> {
        Ok(Self::new(ApiClient::from_env()?))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    async fn execute_item(&self, ctx: &dyn ExecuteContext, index: usize) -> ShadeResult<Value> {
        let request = OperationRequest::from_context(ctx, index)?;
        tracing::debug!(
            item_index = index,
            resource = request.operation.resource(),
            operation = request.operation.name(),
            "Executing item"
        );

        let result = request.run(&self.client).await?;
        Ok(if result.is_null() { json!({}) } else { result })
    }

    /// Drive ID from the lookup parameters, `None` when it cannot be resolved yet
    async fn selected_drive(&self, params: &Map<String, Value>) -> ShadeResult<Option<String>> {
        let Some(drive) = selected(params, "drive")? else {
            return Ok(None);
        };
        let workspace = selected(params, "workspace")?;
        unresolved_as_none(resolve_drive(&self.client, workspace.as_ref(), &drive).await)
    }
}

#[async_trait]
impl Node for ShadeNode {
    fn name(&self) -> &str {
        "shade"
    }

    fn description(&self) -> NodeDescription {
        shade_description(
            LookupMethod::ALL
                .iter()
                .map(|method| method.as_str().to_string())
                .collect(),
        )
    }

    async fn execute(&self, ctx: &dyn ExecuteContext) -> ShadeResult<Vec<NodeOutput>> {
        let mut outputs = Vec::with_capacity(ctx.items().len());

        for index in 0..ctx.items().len() {
            match self.execute_item(ctx, index).await {
                Ok(result) => {
                    tracing::info!(item_index = index, result = %result, "Item executed");
                    outputs.push(NodeOutput::new(result, index));
                }
                Err(err) => {
                    log_item_error(&err, index);
                    if !ctx.continue_on_fail() {
                        return Err(err);
                    }
                    outputs.push(NodeOutput::error(&err, index));
                }
            }
        }

        Ok(outputs)
    }

    async fn list_search(&self, method: &str, params: &Value) -> ShadeResult<Vec<LookupEntry>> {
        let method: LookupMethod = method.parse()?;
        let empty = Map::new();
        let params = params.as_object().unwrap_or(&empty);

        match method {
            LookupMethod::WorkspaceSearch => self.client.search_workspaces().await,
            LookupMethod::DriveSearch => {
                let Some(workspace) = selected(params, "workspace")? else {
                    return Ok(Vec::new());
                };
                let resolved = resolve_workspace(&self.client, &workspace).await;
                let Some(workspace_id) = unresolved_as_none(resolved)? else {
                    return Ok(Vec::new());
                };
                self.client.search_drives(Some(&workspace_id)).await
            }
            LookupMethod::MetadataSearch => {
                let Some(drive_id) = self.selected_drive(params).await? else {
                    return Ok(Vec::new());
                };
                self.client.search_metadata_attributes(Some(&drive_id)).await
            }
            LookupMethod::MetadataOptionSearch => {
                let Some(attribute) = selected(params, "metadataAttribute")? else {
                    return Ok(Vec::new());
                };
                let Some(drive_id) = self.selected_drive(params).await? else {
                    return Ok(Vec::new());
                };
                let resolved = resolve_attribute(&self.client, &drive_id, &attribute).await;
                let Some(attribute_id) = unresolved_as_none(resolved)? else {
                    return Ok(Vec::new());
                };
                self.client
                    .search_metadata_options(Some(&drive_id), Some(&attribute_id))
                    .await
            }
        }
    }
}

/// Non-empty locator entered for `name`
fn selected(params: &Map<String, Value>, name: &str) -> ShadeResult<Option<ResourceLocator>> {
    match params.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let locator = ResourceLocator::from_value(name, value)?;
            Ok((!locator.is_empty()).then_some(locator))
        }
    }
}

/// Lookups list nothing for a name that matches no single resource or lacks its parent.
fn unresolved_as_none(resolved: ShadeResult<String>) -> ShadeResult<Option<String>> {
    match resolved {
        Ok(id) => Ok(Some(id)),
        Err(ShadeError::Validation(reason)) => {
            tracing::debug!(reason = %reason, "Lookup parent not resolved");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn log_item_error(err: &ShadeError, index: usize) {
    let details = err.detailed_message();
    match err.log_level() {
        LogLevel::Debug => {
            tracing::debug!(
                item_index = index,
                error_code = err.error_code(),
                error = %details,
                "Item failed"
            )
        }
        LogLevel::Warn => {
            tracing::warn!(
                item_index = index,
                error_code = err.error_code(),
                error = %details,
                "Item failed"
            )
        }
        LogLevel::Error => {
            tracing::error!(
                item_index = index,
                error_code = err.error_code(),
                error = %details,
                "Item failed"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_core::ShadeConfig;

    fn node() -> ShadeNode {
        ShadeNode::new(ApiClient::new(ShadeConfig::new("key")).unwrap())
    }

    #[test]
    fn test_lookup_method_names() {
        for method in LookupMethod::ALL {
            assert_eq!(method.as_str().parse::<LookupMethod>().unwrap(), method);
        }
        assert!(matches!(
            "fileSearch".parse::<LookupMethod>().unwrap_err(),
            ShadeError::UnknownOperation { .. }
        ));
    }

    #[test]
    fn test_output_serializes_paired_item() {
        let output = NodeOutput::new(json!({"id": "x"}), 2);
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!({"json": {"id": "x"}, "pairedItem": {"item": 2}})
        );
        assert!(!output.is_error());

        let failed = NodeOutput::error(&ShadeError::validation("bad"), 0);
        assert_eq!(failed.json, json!({"error": "Invalid input: bad"}));
        assert!(failed.is_error());
    }

    #[test]
    fn test_description_lists_resources_and_operations() {
        let description = node().description();

        assert_eq!(description.name, "shade");
        assert_eq!(description.resources.len(), 2);
        assert!(description.resource("share").is_none());

        let folder = description.resource("folder").unwrap();
        let values: Vec<_> = folder.operations.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["create", "get_shares", "list", "share"]);

        let asset = description.resource("asset").unwrap();
        assert_eq!(asset.operations.len(), 9);
        assert!(asset.operations.iter().any(|o| o.name == "Get Transcription"));
        assert_eq!(description.list_search_methods.len(), 4);
    }

    #[tokio::test]
    async fn test_list_search_without_parent_selection_is_empty() {
        let node = node();
        assert!(node
            .list_search("driveSearch", &json!({}))
            .await
            .unwrap()
            .is_empty());
        assert!(node
            .list_search("metadataSearch", &json!({"drive": {"mode": "list", "value": ""}}))
            .await
            .unwrap()
            .is_empty());
        assert!(node
            .list_search("metadataOptionSearch", &json!({"drive": "driveA"}))
            .await
            .unwrap()
            .is_empty());
    }
}
