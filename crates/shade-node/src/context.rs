//! Execution context seam between the node and its host.
//!
//! The host owns the input items, the parameter values entered for the node
//! and the continue-on-fail setting. The node only reads them through
//! [`ExecuteContext`], so any host (or a test) can drive it.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::{Map, Value};

/// Binary payload attached to an input item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryData {
    pub data: Bytes,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

impl BinaryData {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// One input item: a JSON document plus named binary properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeItem {
    pub json: Value,
    pub binary: HashMap<String, BinaryData>,
}

impl NodeItem {
    pub fn new(json: Value) -> Self {
        Self {
            json,
            binary: HashMap::new(),
        }
    }

    pub fn with_binary(mut self, property: impl Into<String>, data: BinaryData) -> Self {
        self.binary.insert(property.into(), data);
        self
    }
}

/// What the node needs from the host while executing.
pub trait ExecuteContext: Send + Sync {
    /// Input items, in order
    fn items(&self) -> &[NodeItem];

    /// Value of parameter `name` as evaluated for the item at `index`.
    /// `None` when the parameter is not set.
    fn parameter(&self, name: &str, index: usize) -> Option<Value>;

    /// Whether a failing item becomes an `{error}` output instead of aborting the run
    fn continue_on_fail(&self) -> bool;
}

/// In-memory context.
///
/// Parameters are shared by all items unless overridden for a specific item.
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    items: Vec<NodeItem>,
    parameters: Map<String, Value>,
    item_parameters: HashMap<usize, Map<String, Value>>,
    continue_on_fail: bool,
}

impl StaticContext {
    pub fn new(items: Vec<NodeItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Set a parameter for every item
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set a parameter for the item at `index` only
    pub fn with_item_parameter(
        mut self,
        index: usize,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.item_parameters
            .entry(index)
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }
}

impl ExecuteContext for StaticContext {
    fn items(&self) -> &[NodeItem] {
        &self.items
    }

    fn parameter(&self, name: &str, index: usize) -> Option<Value> {
        self.item_parameters
            .get(&index)
            .and_then(|params| params.get(name))
            .or_else(|| self.parameters.get(name))
            .cloned()
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}
