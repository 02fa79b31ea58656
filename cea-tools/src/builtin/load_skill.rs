//! `load_skill`: reads a skill's instructions, or a file from its bundled
//! directory, guarding against path traversal.

use std::path::Path;

use async_trait::async_trait;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct LoadSkillTool;

#[async_trait]
impl Tool for LoadSkillTool {
    fn name(&self) -> &str {
        "load_skill"
    }

    fn description(&self) -> &str {
        "Read a skill's instructions, or a file bundled alongside it."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "relativePath": { "type": "string" },
            },
            "required": ["name"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let name = input["name"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "name must be a string" }.build())?;
        if name.contains("..") || name.contains('/') {
            return tool_error::InvalidInputSnafu {
                message: "name must not contain '..' or '/'",
            }
            .fail();
        }

        let path = match input.get("relativePath").and_then(Value::as_str) {
            Some(relative_path) => {
                let relative = Path::new(relative_path);
                if relative.is_absolute() || relative.components().any(|c| c == std::path::Component::ParentDir) {
                    return tool_error::InvalidInputSnafu {
                        message: "relativePath must not be absolute or contain '..'",
                    }
                    .fail();
                }
                ctx.skills_dir.join(name).join(relative)
            }
            None => ctx.skills_dir.join(format!("{name}.md")),
        };

        let content = tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                tool_error::NotFoundPathSnafu { path: path.clone() }.build()
            } else {
                tool_error::IoSnafu { path: path.clone(), source }.build()
            }
        })?;

        Ok(ToolOutput::text(content))
    }
}

#[cfg(test)]
#[path = "load_skill.test.rs"]
mod tests;
