//! The tool-calling loop driver: streams one model turn at a time, dispatches
//! tool calls through a registry as they finalize, detects tool calls that
//! never finalized into valid JSON, and re-enters on incomplete todos up to
//! a bounded number of times.

mod accumulator;
mod driver;
mod error;
mod event;
mod result;

pub use driver::LoopDriver;
pub use driver::LoopDriverBuilder;
pub use error::LoopError;
pub use event::GenerateRequest;
pub use event::ModelClient;
pub use event::ModelStreamEvent;
pub use event::ToolDefinition;
pub use result::LoopOutcome;
pub use result::StopReason;
