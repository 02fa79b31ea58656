//! The file-safety reader and the registry of tools the loop driver
//! dispatches model tool-calls to.

mod builtin;
mod context;
mod error;
mod reader;
mod registry;
mod tool;

pub use builtin::DeleteFileTool;
pub use builtin::EditFileTool;
pub use builtin::GlobTool;
pub use builtin::GrepTool;
pub use builtin::LoadSkillTool;
pub use builtin::ReadFileTool;
pub use builtin::ShellExecuteTool;
pub use builtin::TodoWriteTool;
pub use builtin::WriteFileTool;
pub use context::ToolContext;
pub use error::Result;
pub use error::ToolError;
pub use reader::ReadWindowOptions;
pub use reader::ReadWindowResult;
pub use reader::SIZE_CAP_BYTES;
pub use reader::read_window;
pub use registry::ToolRegistry;
pub use tool::Tool;

/// Register every builtin tool with a fresh registry.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(ReadFileTool);
    registry.register(GrepTool);
    registry.register(GlobTool);
    registry.register(EditFileTool);
    registry.register(WriteFileTool);
    registry.register(DeleteFileTool);
    registry.register(ShellExecuteTool);
    registry.register(TodoWriteTool);
    registry.register(LoadSkillTool);
    registry
}
