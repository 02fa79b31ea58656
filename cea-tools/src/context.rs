//! Shared context handed to every tool invocation: the working directory,
//! the shared ignore matcher, and where session-scoped state (spilled
//! output, skills, todos) lives on disk.

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use cea_ignore::IgnoreService;
use cea_todo::TodoStore;
use tokio_util::sync::CancellationToken;

/// Per-call context threaded through the tool registry.
#[derive(Clone)]
pub struct ToolContext {
    pub cwd: PathBuf,
    pub session_id: String,
    pub tmp_dir: PathBuf,
    pub skills_dir: PathBuf,
    pub ignore: Arc<IgnoreService>,
    pub cancel: CancellationToken,
}

impl ToolContext {
    pub fn new(cwd: impl Into<PathBuf>, session_id: impl Into<String>) -> Self {
        let cwd = cwd.into();
        Self {
            tmp_dir: std::env::temp_dir(),
            skills_dir: cwd.join(".cea").join("skills"),
            cwd,
            session_id: session_id.into(),
            ignore: Arc::new(IgnoreService::with_defaults()),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_tmp_dir(mut self, tmp_dir: impl Into<PathBuf>) -> Self {
        self.tmp_dir = tmp_dir.into();
        self
    }

    pub fn with_skills_dir(mut self, skills_dir: impl Into<PathBuf>) -> Self {
        self.skills_dir = skills_dir.into();
        self
    }

    pub fn with_ignore(mut self, ignore: Arc<IgnoreService>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Resolve a caller-supplied path against `cwd` if it's relative.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    pub fn todo_store(&self) -> TodoStore {
        TodoStore::new(&self.cwd, &self.session_id)
    }
}

#[cfg(test)]
#[path = "context.test.rs"]
mod tests;
