//! Configuration for the core agent loop, trimmed to the knobs a
//! single-threaded tool loop without compaction or fallback actually reads.

use serde::Deserialize;
use serde::Serialize;

/// Hard ceiling on manual tool-loop steps before the loop gives up rather
/// than risk spinning forever.
pub const MANUAL_TOOL_LOOP_MAX_STEPS: u32 = 200;

/// Hard ceiling on todo-continuation re-entries before the loop surfaces
/// `AutoContinueLimitReached` instead of looping again.
pub const TODO_CONTINUATION_MAX_LOOPS: u32 = 5;

/// Configuration for the core agent loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Maximum number of turns before stopping. `None` means unbounded
    /// (still subject to `MANUAL_TOOL_LOOP_MAX_STEPS`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_turns: Option<i32>,
    /// Per-tool-call execution timeout, in milliseconds.
    #[serde(default = "default_tool_timeout_ms")]
    pub tool_timeout_ms: u64,
    /// Whether a todo list with incomplete items should trigger an
    /// automatic continuation turn instead of ending the loop.
    #[serde(default = "default_true")]
    pub auto_continue_on_incomplete_todos: bool,
}

fn default_tool_timeout_ms() -> u64 {
    120_000
}

fn default_true() -> bool {
    true
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_turns: None,
            tool_timeout_ms: default_tool_timeout_ms(),
            auto_continue_on_incomplete_todos: true,
        }
    }
}

#[cfg(test)]
#[path = "loop_config.test.rs"]
mod tests;
