//! Append-only conversation history, normalizing model responses as they're
//! recorded: trimming trailing newlines off assistant text and deeply
//! serializing error-like values nested in tool-result content.

mod errorlike;
mod history;

pub use errorlike::deep_serialize_errors;
pub use history::MessageHistory;
