//! `delete_file`: removes a file, or a directory tree with `recursive: true`.

use async_trait::async_trait;
use cea_protocol::ConcurrencySafety;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct DeleteFileTool;

#[async_trait]
impl Tool for DeleteFileTool {
    fn name(&self) -> &str {
        "delete_file"
    }

    fn description(&self) -> &str {
        "Delete a file. Refuses to delete a directory unless recursive is set."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "recursive": { "type": "boolean" },
            },
            "required": ["path"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    fn needs_approval(&self) -> bool {
        true
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let path = input["path"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "path must be a string" }.build())?;
        let recursive = input.get("recursive").and_then(Value::as_bool).unwrap_or(false);
        let resolved = ctx.resolve_path(path);

        let metadata = tokio::fs::metadata(&resolved).await.map_err(|source| classify_error(&resolved, source))?;

        if metadata.is_dir() {
            if !recursive {
                return tool_error::RefusedDirectorySnafu { path: resolved }.fail();
            }
            tokio::fs::remove_dir_all(&resolved).await.map_err(|source| classify_error(&resolved, source))?;
        } else {
            tokio::fs::remove_file(&resolved).await.map_err(|source| classify_error(&resolved, source))?;
        }

        Ok(ToolOutput::text(format!("Deleted {}", resolved.display())))
    }
}

fn classify_error(path: &std::path::Path, source: std::io::Error) -> ToolError {
    if source.kind() == std::io::ErrorKind::NotFound {
        tool_error::NotFoundPathSnafu { path: path.to_path_buf() }.build()
    } else {
        tool_error::IoSnafu { path: path.to_path_buf(), source }.build()
    }
}

#[cfg(test)]
#[path = "delete_file.test.rs"]
mod tests;
