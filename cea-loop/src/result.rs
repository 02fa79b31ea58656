//! How a driver run ended, and the aggregate numbers accumulated over it.

use cea_protocol::TokenUsage;

/// Why the loop stopped driving further turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The model produced a final answer and there were no incomplete todos
    /// (or continuation is disabled).
    Completed,
    /// `MANUAL_TOOL_LOOP_MAX_STEPS` or the caller's `max_turns` was reached.
    MaxTurnsReached,
    /// The caller's cancellation token fired.
    Interrupted,
    /// The todo-continuation re-entry ceiling was reached.
    AutoContinueLimitReached { loops: u32 },
}

/// The outcome of a [`crate::driver::LoopDriver::run`] call.
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    pub stop_reason: StopReason,
    pub turns_completed: i32,
    pub total_usage: TokenUsage,
    pub final_text: String,
}
