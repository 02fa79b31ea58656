//! The canonical set of tools the loop driver dispatches model tool-calls
//! to, keyed by name.

use std::collections::HashMap;

use serde_json::Value;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

/// Holds every registered tool, addressable by name.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(AsRef::as_ref)
    }

    /// `(name, description, input_schema)` triples for every registered
    /// tool, suitable for handing to a model provider.
    pub fn definitions(&self) -> Vec<(String, String, Value)> {
        let mut defs: Vec<(String, String, Value)> = self
            .tools
            .values()
            .map(|tool| (tool.name().to_string(), tool.description().to_string(), tool.input_schema()))
            .collect();
        defs.sort_by(|a, b| a.0.cmp(&b.0));
        defs
    }

    /// Validate `input` and, if valid, execute the named tool.
    pub async fn dispatch(&self, name: &str, input: Value, ctx: &ToolContext) -> Result<cea_protocol::ToolOutput, ToolError> {
        let tool = self.get(name).ok_or_else(|| tool_error::NotFoundSnafu { name: name.to_string() }.build())?;

        if let cea_protocol::ValidationResult::Invalid { errors } = tool.validate(&input).await {
            return tool_error::SchemaInvalidSnafu {
                errors: errors.into_iter().map(|e| e.to_string()).collect::<Vec<_>>(),
            }
            .fail();
        }

        tool.execute(input, ctx).await
    }
}

#[cfg(test)]
#[path = "registry.test.rs"]
mod tests;
