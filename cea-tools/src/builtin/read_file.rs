//! `read_file`: wraps the file-safety reader in a tool descriptor.

use async_trait::async_trait;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::reader::ReadWindowOptions;
use crate::reader::read_window;
use crate::tool::Tool;

pub struct ReadFileTool;

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read a windowed, hashline-tagged view of a text file, gated by ignore rules, binary detection, and a 1 MiB size cap."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "offset": { "type": "integer" },
                "limit": { "type": "integer" },
                "around_line": { "type": "integer" },
                "before": { "type": "integer" },
                "after": { "type": "integer" },
            },
            "required": ["path"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let path = input["path"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "path must be a string" }.build())?;
        let resolved = ctx.resolve_path(path);

        let offset = input.get("offset").and_then(Value::as_i64);
        if let Some(offset) = offset
            && offset < 0
        {
            return tool_error::InvalidInputSnafu { message: "offset must be >= 0" }.fail();
        }
        let limit = input.get("limit").and_then(Value::as_i64);
        if let Some(limit) = limit
            && limit <= 0
        {
            return tool_error::InvalidInputSnafu { message: "limit must be > 0" }.fail();
        }

        let options = ReadWindowOptions {
            offset,
            limit,
            around_line: input.get("around_line").and_then(Value::as_u64).map(|n| n as u32),
            before: input.get("before").and_then(Value::as_u64).map(|n| n as u32),
            after: input.get("after").and_then(Value::as_u64).map(|n| n as u32),
            bypass_ignore: false,
        };

        let result = read_window(&resolved, &ctx.cwd, &ctx.ignore, &options).await?;

        let header = format!(
            "path: {}\nbytes: {}\nlast_modified: {}\nlines: {} (returned: {})\nfile_hash: {}\nrange: L{}-L{}\ntruncated: {}\n\n",
            result.path.display(),
            result.bytes,
            result.last_modified.to_rfc3339(),
            result.total_lines,
            result.end_line.saturating_sub(result.start_line) + 1,
            result.file_hash,
            result.start_line,
            result.end_line,
            result.truncated,
        );

        Ok(ToolOutput::text(format!("{header}{}", result.render_block())))
    }
}

#[cfg(test)]
#[path = "read_file.test.rs"]
mod tests;
