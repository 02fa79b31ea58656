use serde_json::json;
use tempfile::tempdir;

use super::*;

fn ctx(cwd: &std::path::Path) -> ToolContext {
    ToolContext::new(cwd, "session-1")
}

#[tokio::test]
async fn runs_a_command_and_reports_its_output() {
    let dir = tempdir().unwrap();
    let tool = ShellExecuteTool;
    let output = tool.execute(json!({"command": "echo hello"}), &ctx(dir.path())).await.unwrap();

    assert!(!output.is_error);
    assert!(output.content.as_text().contains("hello"));
}

#[tokio::test]
async fn marks_nonzero_exit_as_an_error() {
    let dir = tempdir().unwrap();
    let tool = ShellExecuteTool;
    let output = tool.execute(json!({"command": "exit 1"}), &ctx(dir.path())).await.unwrap();

    assert!(output.is_error);
    assert!(output.content.as_text().contains("[exit_code: 1]"));
}

#[test]
fn declares_unsafe_concurrency_and_needs_approval() {
    assert_eq!(ShellExecuteTool.concurrency_safety(), ConcurrencySafety::Unsafe);
    assert!(ShellExecuteTool.needs_approval());
}
