//! The minimal model-provider contract the loop driver streams against.
//!
//! The teacher workspace has a full multi-provider SDK layer
//! (`provider-sdks/`, `vercel-ai/`) translating between Anthropic, OpenAI,
//! and other wire formats. That translation is out of scope here: the loop
//! driver is written against this single, already-normalized message shape,
//! and whatever adapts a concrete provider's stream into it lives outside
//! this workspace.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Who produced a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

/// A single message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }
}

/// A block of message content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain assistant or user text.
    Text { text: String },
    /// Model reasoning/thinking content.
    Reasoning { text: String },
    /// A tool call the model requested.
    ToolUse {
        call_id: String,
        name: String,
        input: Value,
    },
    /// The result of executing a tool call, fed back as the next message.
    ToolResult {
        call_id: String,
        content: String,
        is_error: bool,
    },
}

/// A tool call accumulated from a model stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub call_id: String,
    pub name: String,
    /// Raw accumulated argument text. May be malformed JSON if the stream
    /// ended before the arguments finished streaming.
    pub raw_input: String,
}

/// Why a model turn ended.
///
/// Providers spell this differently (`tool_calls`, `tool_use`,
/// `function_call`); the loop normalizes all of them to one of these before
/// branching on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model produced a final answer with no further tool calls.
    Stop,
    /// The model requested one or more tool calls.
    ToolCalls,
    /// The stream ended because a length limit was hit.
    Length,
    /// The stream was cancelled before it finished.
    Cancelled,
    /// The provider reported an error mid-stream.
    Error,
}

impl FinishReason {
    /// Normalize a provider-specific finish-reason string.
    ///
    /// Unrecognized strings map to `Stop` rather than erroring: an unknown
    /// finish reason should not itself abort the loop.
    pub fn from_provider_str(s: &str) -> Self {
        match s {
            "tool_calls" | "tool_use" | "function_call" => FinishReason::ToolCalls,
            "length" | "max_tokens" => FinishReason::Length,
            "cancelled" | "aborted" => FinishReason::Cancelled,
            "error" => FinishReason::Error,
            _ => FinishReason::Stop,
        }
    }
}

#[cfg(test)]
#[path = "model.test.rs"]
mod tests;
