use async_trait::async_trait;
use cea_error::ErrorExt;
use serde_json::Value;
use serde_json::json;

use super::*;
use crate::tool::Tool;

struct EchoTool;

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes its input"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": { "message": { "type": "string" } },
            "required": ["message"],
        })
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> Result<cea_protocol::ToolOutput, ToolError> {
        Ok(cea_protocol::ToolOutput::text(input["message"].as_str().unwrap_or_default()))
    }
}

fn ctx() -> ToolContext {
    ToolContext::new("/workspace", "session-1")
}

#[test]
fn definitions_are_sorted_by_name() {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool);
    let defs = registry.definitions();
    assert_eq!(defs[0].0, "echo");
}

#[tokio::test]
async fn dispatch_runs_a_registered_tool() {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool);
    let output = registry.dispatch("echo", json!({"message": "hi"}), &ctx()).await.expect("ok");
    assert_eq!(output.content.as_text(), "hi");
}

#[tokio::test]
async fn dispatch_reports_unknown_tool_names() {
    let registry = ToolRegistry::new();
    let err = registry.dispatch("nope", json!({}), &ctx()).await.expect_err("unknown tool");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[tokio::test]
async fn dispatch_rejects_input_missing_required_fields() {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool);
    let err = registry.dispatch("echo", json!({}), &ctx()).await.expect_err("missing field");
    assert_eq!(err.status_code(), cea_error::StatusCode::SchemaInvalid);
}
