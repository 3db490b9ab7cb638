//! Typed access to the parameters of one item.

use serde_json::Value;
use shade_core::{ShadeError, ShadeResult};

use crate::context::ExecuteContext;
use crate::locator::ResourceLocator;

/// Parameters of the item at `index`
pub struct Params<'a> {
    ctx: &'a dyn ExecuteContext,
    index: usize,
}

impl<'a> Params<'a> {
    pub fn new(ctx: &'a dyn ExecuteContext, index: usize) -> Self {
        Self { ctx, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn context(&self) -> &'a dyn ExecuteContext {
        self.ctx
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.ctx
            .parameter(name, self.index)
            .filter(|value| !value.is_null())
    }

    pub fn string(&self, name: &str) -> ShadeResult<String> {
        match self.get(name) {
            Some(value) => as_string(name, value),
            None => Err(ShadeError::validation(format!(
                "Parameter '{}' is required",
                name
            ))),
        }
    }

    pub fn string_or(&self, name: &str, default: &str) -> ShadeResult<String> {
        match self.get(name) {
            Some(value) => as_string(name, value),
            None => Ok(default.to_string()),
        }
    }

    pub fn bool_or(&self, name: &str, default: bool) -> ShadeResult<bool> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(b),
            Some(_) => Err(ShadeError::validation(format!(
                "Parameter '{}' must be a boolean",
                name
            ))),
            None => Ok(default),
        }
    }

    pub fn u32_or(&self, name: &str, default: u32) -> ShadeResult<u32> {
        match self.get(name) {
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| {
                    ShadeError::validation(format!(
                        "Parameter '{}' must be a non-negative integer",
                        name
                    ))
                }),
            Some(_) => Err(ShadeError::validation(format!(
                "Parameter '{}' must be a number",
                name
            ))),
            None => Ok(default),
        }
    }

    /// A list of strings. A single string counts as a one-element list.
    pub fn string_list(&self, name: &str) -> ShadeResult<Vec<String>> {
        match self.get(name) {
            None => Ok(Vec::new()),
            Some(Value::String(s)) if s.is_empty() => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(vec![s]),
            Some(Value::Array(values)) => values
                .into_iter()
                .map(|value| as_string(name, value))
                .collect(),
            Some(_) => Err(ShadeError::validation(format!(
                "Parameter '{}' must be a list of strings",
                name
            ))),
        }
    }

    pub fn locator(&self, name: &str) -> ShadeResult<Option<ResourceLocator>> {
        self.get(name)
            .map(|value| ResourceLocator::from_value(name, &value))
            .transpose()
    }

    pub fn required_locator(&self, name: &str) -> ShadeResult<ResourceLocator> {
        self.locator(name)?
            .filter(|locator| !locator.is_empty())
            .ok_or_else(|| ShadeError::validation(format!("Parameter '{}' is required", name)))
    }
}

fn as_string(name: &str, value: Value) -> ShadeResult<String> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ShadeError::validation(format!(
            "Parameter '{}' must be a string",
            name
        ))),
    }
}
