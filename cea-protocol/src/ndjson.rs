//! The headless NDJSON event schema written to stdout by the CLI, one
//! compact JSON object per line.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// One line of headless NDJSON output.
///
/// All fields beyond `timestamp`, `type`, and `session_id` are optional and
/// only populated for the event kinds they're relevant to; this keeps each
/// emitted line minimal instead of carrying a wide mostly-null record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NdjsonEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: NdjsonEventType,
    #[serde(rename = "sessionId")]
    pub session_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// The discriminant of an [`NdjsonEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NdjsonEventType {
    User,
    Assistant,
    ToolCall,
    ToolResult,
    Error,
}

impl NdjsonEvent {
    /// Build a bare event carrying only the required fields, ready for a
    /// call site to fill in the kind-specific optional fields.
    pub fn new(now: DateTime<Utc>, event_type: NdjsonEventType, session_id: impl Into<String>) -> Self {
        Self {
            timestamp: now,
            event_type,
            session_id: session_id.into(),
            content: None,
            model: None,
            reasoning_content: None,
            tool_call_id: None,
            tool_name: None,
            tool_input: None,
            output: None,
            error: None,
            exit_code: None,
        }
    }

    /// Serialize as a single compact JSON line, without a trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "ndjson.test.rs"]
mod tests;
