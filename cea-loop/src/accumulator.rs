//! Per-turn accumulator: tracks streamed text/reasoning and in-flight tool
//! calls so the driver can detect malformed calls once the stream ends.
//!
//! Mirrors the accumulation pattern a provider SDK's stream processor uses
//! to rebuild a snapshot from deltas, keyed here by call-id the way a
//! `tool-input-start`/`tool-input-delta`/`tool-input-end` triple is keyed by
//! stream index in that pattern.

use std::collections::HashMap;
use std::collections::HashSet;

use cea_protocol::model::FinishReason;

/// A tool call whose arguments are still streaming in, or finished
/// streaming without ever producing a finalized `tool-call` event.
#[derive(Debug, Clone, Default)]
pub struct PendingToolCall {
    pub name: String,
    pub arguments_buffer: String,
}

/// State accumulated over the course of one model turn.
#[derive(Debug, Default)]
pub struct TurnAccumulator {
    pub current_text: String,
    pub current_reasoning: String,
    pub pending_tool_calls: HashMap<String, PendingToolCall>,
    pub completed_tool_call_ids: HashSet<String>,
    pub last_finish_reason: Option<FinishReason>,
}

impl TurnAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_tool_input(&mut self, call_id: &str, name: &str) {
        self.pending_tool_calls.insert(
            call_id.to_string(),
            PendingToolCall {
                name: name.to_string(),
                arguments_buffer: String::new(),
            },
        );
    }

    pub fn append_tool_input_delta(&mut self, call_id: &str, delta: &str) {
        if let Some(pending) = self.pending_tool_calls.get_mut(call_id) {
            pending.arguments_buffer.push_str(delta);
        }
    }

    /// Mark a call as finalized, so it's excluded from malformed-call
    /// reporting regardless of whether the provider sent a `tool-call` for
    /// an id it never ran `tool-input-start` for.
    pub fn mark_completed(&mut self, call_id: &str) {
        self.completed_tool_call_ids.insert(call_id.to_string());
        self.pending_tool_calls.remove(call_id);
    }

    /// Calls that started streaming arguments but never finalized into a
    /// `tool-call` event, truncated to the 500-char raw buffer the driver
    /// reports per malformed call.
    pub fn malformed_calls(&self) -> Vec<(String, String, String)> {
        self.pending_tool_calls
            .iter()
            .filter(|(id, _)| !self.completed_tool_call_ids.contains(*id))
            .map(|(id, pending)| (id.clone(), pending.name.clone(), truncate(&pending.arguments_buffer, 500)))
            .collect()
    }

    /// Whether the stream's finish reason claimed tool calls but none of
    /// them actually completed while some were attempted: every attempted
    /// call failed to parse.
    pub fn all_tool_calls_malformed(&self) -> bool {
        self.last_finish_reason == Some(FinishReason::ToolCalls)
            && self.completed_tool_call_ids.is_empty()
            && !self.pending_tool_calls.is_empty()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
#[path = "accumulator.test.rs"]
mod tests;
