//! Shared wire and in-process types used across the tool loop: the model
//! provider contract, tool I/O shapes, loop events, loop configuration, and
//! the headless NDJSON event schema.

pub mod loop_config;
pub mod loop_event;
pub mod model;
pub mod ndjson;
pub mod tool_types;

pub use loop_config::LoopConfig;
pub use loop_event::LoopEvent;
pub use loop_event::TokenUsage;
pub use model::ContentBlock;
pub use model::FinishReason;
pub use model::Message;
pub use model::Role;
pub use model::ToolCall;
pub use ndjson::NdjsonEvent;
pub use tool_types::ConcurrencySafety;
pub use tool_types::ContextModifier;
pub use tool_types::ToolOutput;
pub use tool_types::ToolResultContent;
pub use tool_types::ValidationError;
pub use tool_types::ValidationResult;
