//! `grep`: spawns ripgrep as a subprocess and rewrites its output to carry
//! hashline tags instead of bare line numbers.

use async_trait::async_trait;
use cea_hashline::format_tag;
use cea_hashline::line_hash;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

const MATCH_CAP: usize = 20_000;

pub struct GrepTool;

#[async_trait]
impl Tool for GrepTool {
    fn name(&self) -> &str {
        "grep"
    }

    fn description(&self) -> &str {
        "Search file contents with ripgrep; matches are rewritten with hashline tags."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "pattern": { "type": "string" },
                "path": { "type": "string" },
                "glob": { "type": "string" },
                "case_sensitive": { "type": "boolean" },
                "fixed_strings": { "type": "boolean" },
                "context": { "type": "integer" },
                "before_context": { "type": "integer" },
                "after_context": { "type": "integer" },
                "no_ignore": { "type": "boolean" },
            },
            "required": ["pattern"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let pattern = input["pattern"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "pattern must be a string" }.build())?;
        let search_root = ctx.resolve_path(input.get("path").and_then(Value::as_str).unwrap_or("."));

        let mut command = tokio::process::Command::new("rg");
        command.arg("--line-number").arg("--with-filename").arg("--color=never");

        if !input.get("case_sensitive").and_then(Value::as_bool).unwrap_or(false) {
            command.arg("--ignore-case");
        }
        if input.get("fixed_strings").and_then(Value::as_bool).unwrap_or(false) {
            command.arg("--fixed-strings");
        }
        if let Some(glob) = input.get("glob").and_then(Value::as_str) {
            command.arg("--glob").arg(glob);
        }
        if let Some(context) = input.get("context").and_then(Value::as_u64) {
            command.arg("--context").arg(context.to_string());
        }
        if let Some(before) = input.get("before_context").and_then(Value::as_u64) {
            command.arg("--before-context").arg(before.to_string());
        }
        if let Some(after) = input.get("after_context").and_then(Value::as_u64) {
            command.arg("--after-context").arg(after.to_string());
        }
        if input.get("no_ignore").and_then(Value::as_bool).unwrap_or(false) {
            command.arg("--no-ignore");
        }

        command.arg(pattern).arg(&search_root).current_dir(&ctx.cwd);

        let output = command.output().await.map_err(|source| {
            tool_error::IoSnafu {
                path: search_root.clone(),
                source,
            }
            .build()
        })?;

        match output.status.code() {
            Some(0) | Some(1) => {}
            _ => {
                return Ok(ToolOutput::error(String::from_utf8_lossy(&output.stderr).into_owned()));
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut rewritten = String::new();
        let mut matches = 0usize;
        let mut truncated = false;

        for line in stdout.lines() {
            if matches >= MATCH_CAP {
                truncated = true;
                break;
            }
            match parse_rg_line(line) {
                Some((path, line_no, text)) => {
                    let tag = format_tag(line_no, &line_hash(line_no, text));
                    rewritten.push_str(&format!("{path}:{tag} | {text}\n"));
                    matches += 1;
                }
                None => {
                    rewritten.push_str(line);
                    rewritten.push('\n');
                }
            }
        }

        if truncated {
            rewritten.push_str(&format!("... (truncated at {MATCH_CAP} matches)\n"));
        }

        Ok(ToolOutput::text(rewritten))
    }
}

/// Split a ripgrep output line into `(path, line_number, text)`. Match lines
/// use `:` as the separator; context lines use `-`.
fn parse_rg_line(line: &str) -> Option<(String, u32, String)> {
    for sep in [':', '-'] {
        let mut parts = line.splitn(3, sep);
        let path = parts.next()?;
        let line_no = parts.next()?;
        let text = parts.next()?;
        if let Ok(number) = line_no.parse::<u32>() {
            return Some((path.to_string(), number, text.to_string()));
        }
    }
    None
}

#[cfg(test)]
#[path = "grep.test.rs"]
mod tests;
