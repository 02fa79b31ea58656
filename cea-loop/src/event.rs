//! The unified event stream the driver consumes from a model provider, and
//! the trait a provider adapter implements to produce one.
//!
//! Translating a concrete provider's wire format into this stream is outside
//! this crate (see `cea_protocol::model`'s module doc); `cea-loop` only
//! defines the boundary it drives against.

use cea_protocol::Message;
use cea_protocol::TokenUsage;
use futures::stream::BoxStream;
use serde_json::Value;

/// A tool definition handed to the model alongside the request.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A single turn's request against the model provider.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system: String,
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
}

/// One event in the unified stream a model turn produces.
#[derive(Debug, Clone)]
pub enum ModelStreamEvent {
    TextDelta { delta: String },
    ReasoningDelta { delta: String },
    ToolInputStart { call_id: String, name: String },
    ToolInputDelta { call_id: String, delta: String },
    ToolInputEnd { call_id: String },
    /// The provider finalized a tool call with parsed arguments.
    ToolCall { call_id: String, name: String, input: Value },
    /// A result the provider executed itself (e.g. a server-side tool);
    /// the driver forwards it into history without dispatching anything.
    ToolResult { call_id: String, content: String },
    /// As `ToolResult`, but the provider-executed tool failed.
    ToolError { call_id: String, message: String },
    FinishStep { finish_reason: String, usage: Option<TokenUsage> },
}

/// A streaming text-generation provider, already normalized to
/// `cea_protocol`'s message shape.
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn stream(
        &self,
        request: GenerateRequest,
    ) -> Result<BoxStream<'static, ModelStreamEvent>, crate::error::LoopError>;
}

#[cfg(test)]
#[path = "event.test.rs"]
mod tests;
