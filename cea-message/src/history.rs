//! Append-only conversation history.

use cea_protocol::ContentBlock;
use cea_protocol::Message;
use cea_protocol::Role;
use serde_json::Value;

use crate::errorlike::deep_serialize_errors;

/// The running list of messages exchanged in a session.
///
/// Messages are only ever appended; there is no compaction or windowing
/// here, so `to_model_messages` is always a full, faithful snapshot
/// suitable for re-submission to the model.
#[derive(Debug, Clone, Default)]
pub struct MessageHistory {
    messages: Vec<Message>,
}

impl MessageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a single message without normalization, e.g. a user prompt or
    /// a tool result the loop driver constructs itself.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// A snapshot of the full history, suitable for handing to the model
    /// provider as the next request's message list.
    pub fn to_model_messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Append messages returned by the model, normalizing them first:
    /// an assistant message's final text block has its trailing newlines
    /// trimmed, and any tool-result content that parses as JSON has
    /// nested error-like values deeply serialized.
    pub fn add_model_messages(&mut self, messages: Vec<Message>) {
        for message in messages {
            self.messages.push(normalize_model_message(message));
        }
    }
}

fn normalize_model_message(mut message: Message) -> Message {
    if message.role == Role::Assistant {
        trim_final_text_block(&mut message.content);
    }
    for block in &mut message.content {
        if let ContentBlock::ToolResult { content, .. } = block {
            *content = normalize_tool_result_content(content);
        }
    }
    message
}

fn trim_final_text_block(blocks: &mut [ContentBlock]) {
    if let Some(ContentBlock::Text { text }) = blocks
        .iter_mut()
        .rev()
        .find(|b| matches!(b, ContentBlock::Text { .. }))
    {
        let trimmed = text.trim_end_matches('\n').to_string();
        *text = trimmed;
    }
}

/// Parse `content` as JSON and run it through [`deep_serialize_errors`],
/// re-serializing the result. Content that isn't JSON (plain tool output
/// text) is returned unchanged.
fn normalize_tool_result_content(content: &str) -> String {
    match serde_json::from_str::<Value>(content) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => {
            let normalized = deep_serialize_errors(value);
            serde_json::to_string(&normalized).unwrap_or_else(|_| content.to_string())
        }
        _ => content.to_string(),
    }
}

#[cfg(test)]
#[path = "history.test.rs"]
mod tests;
