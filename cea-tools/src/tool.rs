//! The `Tool` trait every registry entry implements.

use async_trait::async_trait;
use cea_protocol::ConcurrencySafety;
use cea_protocol::ToolOutput;
use cea_protocol::ValidationError;
use cea_protocol::ValidationResult;
use serde_json::Value;

use crate::context::ToolContext;
use crate::error::ToolError;

/// A tool the loop driver can dispatch a model-requested call to.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> Value;

    /// Whether calls to this tool may run concurrently with other tools in
    /// the same dispatch batch. Defaults to `Safe`; state-mutating tools
    /// override this to `Unsafe`.
    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Safe
    }

    /// Whether the host should pause for approval before running this call.
    /// Headless mode may auto-approve.
    fn needs_approval(&self) -> bool {
        false
    }

    /// Validate `input` against [`input_schema`](Tool::input_schema).
    /// Default implementation only checks that required fields are present.
    async fn validate(&self, input: &Value) -> ValidationResult {
        let schema = self.input_schema();
        let Some(required) = schema.get("required").and_then(Value::as_array) else {
            return ValidationResult::Valid;
        };
        for field in required {
            let Some(name) = field.as_str() else { continue };
            if input.get(name).is_none() {
                return ValidationResult::Invalid {
                    errors: vec![ValidationError::with_path(format!("missing required field: {name}"), name)],
                };
            }
        }
        ValidationResult::Valid
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
