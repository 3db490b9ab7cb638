use serde_json::Value;
use shade_api_client::ApiClient;
use shade_core::models::AllowedAction;
use shade_core::{ShadeError, ShadeResult};
use validator::Validate;

use super::RESOURCE_FOLDER;
use crate::params::Params;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateFolderArgs {
    /// Parent folder, e.g. `/driveA/2024`
    pub path: String,
    #[validate(length(min = 1, message = "Folder name must not be empty"))]
    pub folder_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArgs {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ShareArgs {
    #[validate(length(min = 1, message = "Share path must not be empty"))]
    pub path: String,
    #[validate(length(min = 1, message = "Share name must not be empty"))]
    pub name: String,
    pub allowed_actions: Vec<AllowedAction>,
    pub public_enabled: bool,
}

impl ShareArgs {
    pub(crate) fn parse(params: &Params<'_>) -> ShadeResult<Self> {
        let allowed_actions = params
            .string_list("allowedActions")?
            .iter()
            .map(|action| action.parse())
            .collect::<ShadeResult<Vec<AllowedAction>>>()?;

        let args = Self {
            path: params.string("path")?,
            name: params.string("name")?,
            allowed_actions,
            public_enabled: params.bool_or("publicEnabled", false)?,
        };
        args.validate()?;
        Ok(args)
    }

    pub(crate) async fn run(&self, client: &ApiClient, drive_id: &str) -> ShadeResult<Value> {
        client
            .create_share(
                drive_id,
                &self.path,
                &self.name,
                &self.allowed_actions,
                self.public_enabled,
            )
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOperation {
    Create(CreateFolderArgs),
    List(PathArgs),
    Share(ShareArgs),
    GetShares(PathArgs),
}

impl FolderOperation {
    /// `(value, display name)` of every folder operation
    pub const OPERATIONS: &'static [(&'static str, &'static str)] = &[
        ("create", "Create"),
        ("get_shares", "Get Shares"),
        ("list", "List"),
        ("share", "Share"),
    ];

    pub fn parse(params: &Params<'_>, operation: &str) -> ShadeResult<Self> {
        let op = match operation {
            "create" => {
                let args = CreateFolderArgs {
                    path: params.string("path")?,
                    folder_name: params.string("folderName")?,
                };
                args.validate()?;
                Self::Create(args)
            }
            "list" => Self::List(PathArgs {
                path: params.string_or("path", "")?,
            }),
            "share" => Self::Share(ShareArgs::parse(params)?),
            "get_shares" => Self::GetShares(PathArgs {
                path: params.string("path")?,
            }),
            other => return Err(ShadeError::unknown_operation(RESOURCE_FOLDER, other)),
        };
        Ok(op)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::List(_) => "list",
            Self::Share(_) => "share",
            Self::GetShares(_) => "get_shares",
        }
    }

    pub async fn run(self, client: &ApiClient, drive_id: &str) -> ShadeResult<Value> {
        match self {
            Self::Create(args) => {
                let result = client
                    .create_folder(drive_id, &args.path, &args.folder_name)
                    .await?;
                Ok(serde_json::to_value(result)?)
            }
            Self::List(args) => client.list_folder(drive_id, &args.path).await,
            Self::Share(args) => args.run(client, drive_id).await,
            Self::GetShares(args) => client.get_shares(drive_id, &args.path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{NodeItem, StaticContext};
    use serde_json::json;

    fn parse(ctx: &StaticContext, operation: &str) -> ShadeResult<FolderOperation> {
        FolderOperation::parse(&Params::new(ctx, 0), operation)
    }

    #[test]
    fn test_every_listed_operation_parses() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("path", "/driveA/2024")
            .with_parameter("folderName", "Reports")
            .with_parameter("name", "Review");

        for (value, _) in FolderOperation::OPERATIONS {
            let op = parse(&ctx, value).unwrap();
            assert_eq!(op.name(), *value);
        }
    }

    #[test]
    fn test_create_requires_folder_name() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("path", "/driveA")
            .with_parameter("folderName", "");

        let err = parse(&ctx, "create").unwrap_err();
        assert!(matches!(err, ShadeError::Validation(_)));
    }

    #[test]
    fn test_list_defaults_to_drive_root() {
        let ctx = StaticContext::new(vec![NodeItem::default()]);
        assert_eq!(
            parse(&ctx, "list").unwrap(),
            FolderOperation::List(PathArgs {
                path: String::new()
            })
        );
    }

    #[test]
    fn test_share_parses_allowed_actions() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("path", "/driveA/2024")
            .with_parameter("name", "Client review")
            .with_parameter("allowedActions", json!(["read", "edit_metadata"]))
            .with_parameter("publicEnabled", true);

        match parse(&ctx, "share").unwrap() {
            FolderOperation::Share(args) => {
                assert_eq!(
                    args.allowed_actions,
                    vec![AllowedAction::Read, AllowedAction::EditMetadata]
                );
                assert!(args.public_enabled);
            }
            other => panic!("expected share, got {:?}", other),
        }
    }

    #[test]
    fn test_share_rejects_unknown_action() {
        let ctx = StaticContext::new(vec![NodeItem::default()])
            .with_parameter("path", "/driveA/2024")
            .with_parameter("name", "Client review")
            .with_parameter("allowedActions", json!(["delete"]));

        assert!(matches!(
            parse(&ctx, "share").unwrap_err(),
            ShadeError::Validation(_)
        ));
    }

    #[test]
    fn test_unknown_folder_operation() {
        let ctx = StaticContext::new(vec![NodeItem::default()]);
        let err = parse(&ctx, "rename").unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation 'rename' for resource 'folder'");
    }
}
