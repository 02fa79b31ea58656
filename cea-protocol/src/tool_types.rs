//! Tool-related types shared between the tool registry and the loop driver.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Concurrency safety level for a tool.
///
/// Determines whether a tool can be executed concurrently with other tools
/// in the same dispatch batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcurrencySafety {
    /// Tool is safe to run concurrently with other tools.
    #[default]
    Safe,
    /// Tool must run exclusively.
    Unsafe,
}

impl ConcurrencySafety {
    pub fn is_safe(&self) -> bool {
        matches!(self, ConcurrencySafety::Safe)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConcurrencySafety::Safe => "safe",
            ConcurrencySafety::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for ConcurrencySafety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content of a tool result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    /// Plain text content, the common case.
    Text(String),
    /// Structured content (JSON), for tools that return machine-readable data.
    Structured(Value),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text(String::new())
    }
}

impl ToolResultContent {
    /// Borrow the text if this is a `Text` variant, formatting `Structured`
    /// content as compact JSON otherwise.
    pub fn as_text(&self) -> String {
        match self {
            ToolResultContent::Text(s) => s.clone(),
            ToolResultContent::Structured(v) => v.to_string(),
        }
    }
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The content of the output.
    pub content: ToolResultContent,
    /// Whether this output represents an error.
    #[serde(default)]
    pub is_error: bool,
    /// Context modifiers to apply after this tool execution.
    #[serde(default)]
    pub modifiers: Vec<ContextModifier>,
}

impl Default for ToolOutput {
    fn default() -> Self {
        Self {
            content: ToolResultContent::default(),
            is_error: false,
            modifiers: Vec::new(),
        }
    }
}

impl ToolOutput {
    /// Create a successful text output.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: ToolResultContent::Text(content.into()),
            is_error: false,
            modifiers: Vec::new(),
        }
    }

    /// Create an error output.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: ToolResultContent::Text(message.into()),
            is_error: true,
            modifiers: Vec::new(),
        }
    }

    /// Create a structured output.
    pub fn structured(value: Value) -> Self {
        Self {
            content: ToolResultContent::Structured(value),
            is_error: false,
            modifiers: Vec::new(),
        }
    }

    /// Attach a context modifier.
    pub fn with_modifier(mut self, modifier: ContextModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }
}

/// A modifier that changes loop-level state after a tool runs.
///
/// Trimmed to the one modifier the tool set actually produces: a todo-list
/// update that the loop driver surfaces to the continuation check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextModifier {
    /// The todo list changed as a result of this tool call.
    TodosUpdated {
        /// Number of todos still not `completed`.
        incomplete_count: usize,
    },
}

/// Result of validating tool input against its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<ValidationError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn valid() -> Self {
        ValidationResult::Valid
    }

    pub fn error(message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            errors: vec![ValidationError::new(message)],
        }
    }
}

/// A single validation error, optionally scoped to a JSON path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{path}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
#[path = "tool_types.test.rs"]
mod tests;
