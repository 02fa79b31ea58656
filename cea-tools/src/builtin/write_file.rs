//! `write_file`: creates or overwrites a file with the given content.

use async_trait::async_trait;
use cea_protocol::ConcurrencySafety;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct WriteFileTool;

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &str {
        "write_file"
    }

    fn description(&self) -> &str {
        "Create or overwrite a file with the given content, creating parent directories as needed."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "content": { "type": "string" },
            },
            "required": ["path", "content"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let path = input["path"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "path must be a string" }.build())?;
        let content = input["content"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "content must be a string" }.build())?;
        let resolved = ctx.resolve_path(path);

        if let Some(parent) = resolved.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|source| {
                tool_error::IoSnafu {
                    path: resolved.clone(),
                    source,
                }
                .build()
            })?;
        }

        tokio::fs::write(&resolved, content).await.map_err(|source| {
            tool_error::IoSnafu {
                path: resolved.clone(),
                source,
            }
            .build()
        })?;

        Ok(ToolOutput::text(format!("Wrote {} bytes to {}", content.len(), resolved.display())))
    }
}

#[cfg(test)]
#[path = "write_file.test.rs"]
mod tests;
