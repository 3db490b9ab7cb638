//! Operations the node can run, parsed from the parameters of one item.
//!
//! `resource` and `operation` select a variant of [`NodeOperation`]; each
//! variant carries a typed argument struct checked with `validator`. The
//! drive every operation targets is kept as an unresolved locator in
//! [`OperationRequest`] since resolving a drive name needs the API.

mod asset;
mod folder;

pub use asset::*;
pub use folder::*;

use serde_json::Value;
use shade_api_client::ApiClient;
use shade_core::{ShadeError, ShadeResult};

use crate::context::ExecuteContext;
use crate::locator::{resolve_drive, ResourceLocator};
use crate::params::Params;

pub const RESOURCE_FOLDER: &str = "folder";
pub const RESOURCE_ASSET: &str = "asset";

#[derive(Debug, Clone, PartialEq)]
pub enum NodeOperation {
    Folder(FolderOperation),
    Asset(AssetOperation),
}

impl NodeOperation {
    pub fn parse(params: &Params<'_>, resource: &str, operation: &str) -> ShadeResult<Self> {
        match resource {
            RESOURCE_FOLDER => Ok(Self::Folder(FolderOperation::parse(params, operation)?)),
            RESOURCE_ASSET => Ok(Self::Asset(AssetOperation::parse(params, operation)?)),
            _ => Err(ShadeError::unknown_operation(resource, operation)),
        }
    }

    pub fn resource(&self) -> &'static str {
        match self {
            Self::Folder(_) => RESOURCE_FOLDER,
            Self::Asset(_) => RESOURCE_ASSET,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Folder(op) => op.name(),
            Self::Asset(op) => op.name(),
        }
    }

    pub async fn run(self, client: &ApiClient, drive_id: &str) -> ShadeResult<Value> {
        match self {
            Self::Folder(op) => op.run(client, drive_id).await,
            Self::Asset(op) => op.run(client, drive_id).await,
        }
    }
}

/// Everything needed to run one item
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub workspace: Option<ResourceLocator>,
    pub drive: ResourceLocator,
    pub operation: NodeOperation,
}

impl OperationRequest {
    /// Read and validate the parameters of the item at `index`.
    ///
    /// The (resource, operation) pair is checked before any other parameter.
    pub fn from_context(ctx: &dyn ExecuteContext, index: usize) -> ShadeResult<Self> {
        let params = Params::new(ctx, index);
        let resource = params.string("resource")?;
        let operation = params.string("operation")?;

        let operation = NodeOperation::parse(&params, &resource, &operation)?;

        Ok(Self {
            workspace: params.locator("workspace")?,
            drive: params.required_locator("drive")?,
            operation,
        })
    }

    pub async fn run(self, client: &ApiClient) -> ShadeResult<Value> {
        let drive_id = resolve_drive(client, self.workspace.as_ref(), &self.drive).await?;
        self.operation.run(client, &drive_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{NodeItem, StaticContext};
    use crate::locator::LocatorMode;
    use serde_json::json;

    fn ctx(resource: &str, operation: &str) -> StaticContext {
        StaticContext::new(vec![NodeItem::default()])
            .with_parameter("resource", resource)
            .with_parameter("operation", operation)
            .with_parameter("workspace", json!({"mode": "list", "value": "ws-1"}))
            .with_parameter("drive", json!({"mode": "list", "value": "driveA"}))
            .with_parameter("path", "/driveA/2024")
            .with_parameter("folderName", "Reports")
    }

    #[test]
    fn test_parse_folder_create() {
        let request = OperationRequest::from_context(&ctx("folder", "create"), 0).unwrap();

        assert_eq!(request.drive.mode, LocatorMode::List);
        assert_eq!(request.drive.value, "driveA");
        assert_eq!(request.workspace.unwrap().value, "ws-1");
        assert_eq!(request.operation.resource(), "folder");
        assert_eq!(request.operation.name(), "create");
        assert_eq!(
            request.operation,
            NodeOperation::Folder(FolderOperation::Create(CreateFolderArgs {
                path: "/driveA/2024".to_string(),
                folder_name: "Reports".to_string(),
            }))
        );
    }

    #[test]
    fn test_share_resource_is_unknown() {
        let err = OperationRequest::from_context(&ctx("share", "create"), 0).unwrap_err();
        match err {
            ShadeError::UnknownOperation {
                resource,
                operation,
            } => {
                assert_eq!(resource, "share");
                assert_eq!(operation, "create");
            }
            other => panic!("expected unknown operation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operation_is_reported_before_missing_parameters() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("resource", "asset")
            .with_parameter("operation", "delete");

        let err = OperationRequest::from_context(&ctx, 0).unwrap_err();
        assert!(matches!(err, ShadeError::UnknownOperation { .. }));
    }

    #[test]
    fn test_missing_resource_is_validation_error() {
        let ctx = StaticContext::new(vec![NodeItem::default()]).with_parameter("operation", "get");
        let err = OperationRequest::from_context(&ctx, 0).unwrap_err();
        assert!(matches!(err, ShadeError::Validation(_)));
    }

    #[test]
    fn test_missing_drive_is_validation_error() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("resource", "folder")
            .with_parameter("operation", "list")
            .with_parameter("drive", json!({"mode": "list", "value": ""}));

        let err = OperationRequest::from_context(&ctx, 0).unwrap_err();
        assert!(err.to_string().contains("'drive'"));
    }
}
