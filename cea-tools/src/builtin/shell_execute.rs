//! `shell_execute`: wraps the process executor in a tool descriptor.

use async_trait::async_trait;
use cea_executor::ExecuteOptions;
use cea_executor::StdinMode;
use cea_protocol::ConcurrencySafety;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct ShellExecuteTool;

#[async_trait]
impl Tool for ShellExecuteTool {
    fn name(&self) -> &str {
        "shell_execute"
    }

    fn description(&self) -> &str {
        "Run a shell command in a detached process group with a timeout and output sanitization."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "command": { "type": "string" },
                "timeout_ms": { "type": "integer" },
                "stdin": { "type": "string" },
            },
            "required": ["command"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    fn needs_approval(&self) -> bool {
        true
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let command = input["command"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "command must be a string" }.build())?;

        let mut options = ExecuteOptions::new(ctx.cwd.clone());
        options.tmp_dir = ctx.tmp_dir.clone();
        if let Some(timeout_ms) = input.get("timeout_ms").and_then(Value::as_u64) {
            options = options.with_timeout_ms(timeout_ms);
        }
        if let Some(stdin) = input.get("stdin").and_then(Value::as_str) {
            options = options.with_stdin(StdinMode::Piped(stdin.to_string()));
        }

        let result = cea_executor::execute(command, options, ctx.cancel.clone()).await;

        let mut summary = result.output.clone();
        summary.push_str(&format!("\n[exit_code: {}]", result.exit_code));
        if result.timed_out {
            summary.push_str(" [timed_out]");
        }
        if result.cancelled {
            summary.push_str(" [cancelled]");
        }
        if let Some(spilled) = &result.spilled_path {
            summary.push_str(&format!(" [full output: {}]", spilled.display()));
        }

        Ok(ToolOutput {
            content: cea_protocol::ToolResultContent::Text(summary),
            is_error: result.exit_code != 0,
            modifiers: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "shell_execute.test.rs"]
mod tests;
