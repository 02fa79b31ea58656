//! Events emitted during loop execution, trimmed to what a single-threaded
//! tool loop without compaction, hooks, or provider fallback actually
//! produces.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Token usage reported for a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: i64,
    #[serde(default)]
    pub output_tokens: i64,
}

impl TokenUsage {
    pub fn new(input_tokens: i64, output_tokens: i64) -> Self {
        Self {
            input_tokens,
            output_tokens,
        }
    }

    pub fn total(&self) -> i64 {
        self.input_tokens + self.output_tokens
    }
}

/// Events emitted while the loop drives a conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoopEvent {
    /// A new turn has started.
    TurnStarted { turn_id: String, turn_number: i32 },
    /// A turn has completed with the given usage.
    TurnCompleted { turn_id: String, usage: TokenUsage },

    /// Text content delta from the model.
    TextDelta { turn_id: String, delta: String },
    /// Reasoning/thinking content delta, for models that stream it.
    ReasoningDelta { turn_id: String, delta: String },

    /// A tool call was dispatched.
    ToolCallStarted {
        call_id: String,
        name: String,
        input: Value,
    },
    /// A tool call finished, successfully or not.
    ToolCallCompleted {
        call_id: String,
        output: String,
        is_error: bool,
    },

    /// The model emitted a tool call whose arguments never became valid
    /// JSON before the stream ended.
    MalformedToolCall { call_id: String, name: String, raw: String },

    /// An error terminated the loop.
    Error { message: String, status_code: i32 },
    /// The loop was cancelled by the caller.
    Interrupted,
    /// The configured turn ceiling was reached.
    MaxTurnsReached,
    /// The todo-continuation re-entry ceiling was reached.
    AutoContinueLimitReached { loops: u32 },
}

#[cfg(test)]
#[path = "loop_event.test.rs"]
mod tests;
