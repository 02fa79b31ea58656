//! `glob`: pattern expansion over a directory, filtered through the ignore
//! engine, newest files first.

use std::time::SystemTime;

use async_trait::async_trait;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct GlobTool;

#[async_trait]
impl Tool for GlobTool {
    fn name(&self) -> &str {
        "glob"
    }

    fn description(&self) -> &str {
        "Expand a glob pattern under a directory, filtered through ignore rules, newest files first."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "pattern": { "type": "string" },
                "path": { "type": "string" },
                "bypass_ignore": { "type": "boolean" },
            },
            "required": ["pattern"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let pattern = input["pattern"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "pattern must be a string" }.build())?;
        let base = ctx.resolve_path(input.get("path").and_then(Value::as_str).unwrap_or("."));
        let bypass_ignore = input.get("bypass_ignore").and_then(Value::as_bool).unwrap_or(false);

        let full_pattern = base.join(pattern);
        let full_pattern = full_pattern.to_string_lossy().into_owned();

        let paths = glob::glob(&full_pattern).map_err(|source| {
            tool_error::InvalidInputSnafu {
                message: format!("invalid glob pattern: {source}"),
            }
            .build()
        })?;

        let mut matches: Vec<(std::path::PathBuf, SystemTime)> = Vec::new();
        for entry in paths.flatten() {
            if !bypass_ignore && ctx.ignore.is_ignored(&ctx.cwd, &entry) {
                continue;
            }
            let Ok(metadata) = std::fs::metadata(&entry) else { continue };
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            matches.push((entry, modified));
        }

        matches.sort_by(|a, b| b.1.cmp(&a.1));

        if matches.is_empty() {
            return Ok(ToolOutput::text("No files found"));
        }

        let rendered = matches
            .into_iter()
            .map(|(path, _)| path.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(ToolOutput::text(rendered))
    }
}

#[cfg(test)]
#[path = "glob.test.rs"]
mod tests;
