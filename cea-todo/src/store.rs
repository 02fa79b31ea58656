//! Per-session todo persistence: a canonical JSON file and a human-readable
//! markdown mirror, both under `<root>/.cea/<session_id>.{json,md}`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use snafu::ResultExt;

use crate::error::TodoError;
use crate::error::todo_error;
use crate::item::TodoItem;
use crate::item::TodoStatus;

#[derive(Debug, Serialize, Deserialize)]
struct StoredTodos {
    #[serde(rename = "updatedAt")]
    updated_at: DateTime<Utc>,
    todos: Vec<TodoItem>,
}

/// Reads and writes one session's todo list to disk.
pub struct TodoStore {
    json_path: PathBuf,
    markdown_path: PathBuf,
}

impl TodoStore {
    pub fn new(root: impl AsRef<Path>, session_id: impl AsRef<str>) -> Self {
        let dir = root.as_ref().join(".cea");
        let session_id = session_id.as_ref();
        Self {
            json_path: dir.join(format!("{session_id}.json")),
            markdown_path: dir.join(format!("{session_id}.md")),
        }
    }

    /// Replace the stored list. Every item must have non-empty content.
    /// Writes the canonical JSON file first, then the markdown mirror.
    pub fn write(&self, todos: &[TodoItem]) -> Result<(), TodoError> {
        for (index, item) in todos.iter().enumerate() {
            if item.content.trim().is_empty() {
                return todo_error::EmptyContentSnafu { index }.fail();
            }
        }

        if let Some(dir) = self.json_path.parent() {
            fs::create_dir_all(dir).context(todo_error::WriteSnafu { path: dir.to_path_buf() })?;
        }

        let stored = StoredTodos {
            updated_at: Utc::now(),
            todos: todos.to_vec(),
        };
        let json = serde_json::to_string_pretty(&stored).unwrap_or_else(|_| "{}".to_string());
        fs::write(&self.json_path, json).context(todo_error::WriteSnafu {
            path: self.json_path.clone(),
        })?;

        let markdown = render_markdown(todos, stored.updated_at);
        fs::write(&self.markdown_path, markdown).context(todo_error::WriteSnafu {
            path: self.markdown_path.clone(),
        })?;

        Ok(())
    }

    /// Tasks that are neither completed nor cancelled. An absent or
    /// malformed JSON file is treated as an empty list; other I/O errors
    /// (permissions, etc.) propagate.
    pub fn incomplete(&self) -> Result<Vec<TodoItem>, TodoError> {
        let bytes = match fs::read(&self.json_path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(source).context(todo_error::ReadSnafu {
                    path: self.json_path.clone(),
                });
            }
        };

        let Ok(stored) = serde_json::from_slice::<StoredTodos>(&bytes) else {
            return Ok(Vec::new());
        };

        Ok(stored
            .todos
            .into_iter()
            .filter(|item| item.status.is_incomplete())
            .collect())
    }
}

const STATUS_GROUPS: [(TodoStatus, &str); 4] = [
    (TodoStatus::InProgress, "In Progress"),
    (TodoStatus::Pending, "Pending"),
    (TodoStatus::Completed, "Completed"),
    (TodoStatus::Cancelled, "Cancelled"),
];

fn render_markdown(todos: &[TodoItem], updated_at: DateTime<Utc>) -> String {
    let mut out = format!("# Todo list\n\nUpdated: {}\n\n", updated_at.to_rfc3339());

    if todos.is_empty() {
        out.push_str("(no tasks)\n");
        return out;
    }

    for (status, label) in STATUS_GROUPS {
        let items: Vec<&TodoItem> = todos.iter().filter(|item| item.status == status).collect();
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("## {label}\n\n"));
        for item in items {
            let marker = match status {
                TodoStatus::Completed => "x",
                TodoStatus::Cancelled => "~",
                TodoStatus::InProgress => ">",
                TodoStatus::Pending => " ",
            };
            out.push_str(&format!("- [{marker}] {}\n", item.content));
            if let Some(description) = &item.description {
                out.push_str(&format!("  {description}\n"));
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "store.test.rs"]
mod tests;
