//! `todo_write`: wraps the per-session todo store.

use async_trait::async_trait;
use cea_protocol::ContextModifier;
use cea_protocol::ToolOutput;
use cea_todo::TodoItem;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct TodoWriteTool;

#[async_trait]
impl Tool for TodoWriteTool {
    fn name(&self) -> &str {
        "todo_write"
    }

    fn description(&self) -> &str {
        "Replace the current session's todo list, persisting it as JSON and a markdown mirror."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "todos": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "content": { "type": "string" },
                            "status": { "type": "string", "enum": ["pending", "in_progress", "completed", "cancelled"] },
                            "priority": { "type": "string", "enum": ["high", "medium", "low"] },
                            "description": { "type": "string" },
                        },
                        "required": ["id", "content", "status", "priority"],
                    },
                },
            },
            "required": ["todos"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let todos: Vec<TodoItem> = serde_json::from_value(input["todos"].clone()).map_err(|source| {
            tool_error::InvalidInputSnafu {
                message: format!("invalid todos: {source}"),
            }
            .build()
        })?;

        let store = ctx.todo_store();
        store.write(&todos)?;

        let incomplete_count = todos.iter().filter(|todo| todo.status.is_incomplete()).count();

        Ok(ToolOutput::text(format!("Saved {} todo(s); {incomplete_count} incomplete.", todos.len()))
            .with_modifier(ContextModifier::TodosUpdated { incomplete_count }))
    }
}

#[cfg(test)]
#[path = "todo_write.test.rs"]
mod tests;
