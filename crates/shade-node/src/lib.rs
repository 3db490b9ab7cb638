//! Shade workflow node
//!
//! Turns the parameters of each input item into a Shade folder or asset
//! operation, runs it through [`shade_api_client::ApiClient`] and collects one
//! output record per item. Hosts drive the node through [`Node`] and supply
//! items and parameters through [`ExecuteContext`].

pub mod context;
pub mod description;
pub mod locator;
pub mod node;
pub mod operation;
pub mod params;

pub use context::{BinaryData, ExecuteContext, NodeItem, StaticContext};
pub use description::{NodeDescription, OperationDescription, ResourceDescription};
pub use locator::{LocatorMode, ResourceLocator};
pub use node::{LookupMethod, Node, NodeOutput, PairedItem, ShadeNode};
pub use operation::{AssetOperation, FolderOperation, NodeOperation, OperationRequest};

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// For hosts that do not set up their own subscriber. Calling it twice is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
