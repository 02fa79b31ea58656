use std::fs;
use std::thread::sleep;
use std::time::Duration;

use serde_json::json;
use tempfile::tempdir;

use super::*;

fn ctx(cwd: &std::path::Path) -> ToolContext {
    ToolContext::new(cwd, "session-1")
}

#[tokio::test]
async fn expands_a_pattern_newest_first() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "a").unwrap();
    sleep(Duration::from_millis(10));
    fs::write(dir.path().join("b.rs"), "b").unwrap();

    let tool = GlobTool;
    let output = tool.execute(json!({"pattern": "*.rs"}), &ctx(dir.path())).await.unwrap();
    let text = output.content.as_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("b.rs"));
    assert!(lines[1].ends_with("a.rs"));
}

#[tokio::test]
async fn reports_no_files_found() {
    let dir = tempdir().unwrap();

    let tool = GlobTool;
    let output = tool.execute(json!({"pattern": "*.nonexistent"}), &ctx(dir.path())).await.unwrap();
    assert_eq!(output.content.as_text(), "No files found");
}

#[tokio::test]
async fn skips_ignored_directories() {
    let dir = tempdir().unwrap();
    let git_dir = dir.path().join(".git");
    fs::create_dir_all(&git_dir).unwrap();
    fs::write(git_dir.join("config.rs"), "irrelevant").unwrap();
    fs::write(dir.path().join("kept.rs"), "kept").unwrap();

    let tool = GlobTool;
    let output = tool.execute(json!({"pattern": "**/*.rs"}), &ctx(dir.path())).await.unwrap();
    let text = output.content.as_text();

    assert!(text.contains("kept.rs"));
    assert!(!text.contains("config.rs"));
}
