use serde_json::json;

use super::*;

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

    async fn execute(&self, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::text(input["message"].as_str().unwrap_or_default()))
    }
}

#[tokio::test]
async fn valid_input_passes() {
    let tool = EchoTool;
    assert_eq!(tool.validate(&json!({"message": "hi"})).await, ValidationResult::Valid);
}

#[tokio::test]
async fn missing_required_field_is_reported() {
    let tool = EchoTool;
    let result = tool.validate(&json!({})).await;
    assert!(!result.is_valid());
}

#[test]
fn defaults_to_safe_concurrency_and_no_approval() {
    let tool = EchoTool;
    assert_eq!(tool.concurrency_safety(), ConcurrencySafety::Safe);
    assert!(!tool.needs_approval());
}
