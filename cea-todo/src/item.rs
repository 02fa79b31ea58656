//! The shape of a single task tracked by the todo store.

use serde::Deserialize;
use serde::Serialize;

/// Where a task currently stands. `Completed` and `Cancelled` are the two
/// states that count as "done" for continuation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TodoStatus {
    /// A task is incomplete if it still needs attention: not finished and
    /// not abandoned.
    pub fn is_incomplete(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Caller-assigned urgency, used only for display ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoPriority {
    High,
    Medium,
    Low,
}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub content: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
#[path = "item.test.rs"]
mod tests;
