use std::fs;

use serde_json::json;
use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn writes_a_new_file() {
    let dir = tempdir().unwrap();
    let tool = WriteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");

    tool.execute(json!({"path": "out.txt", "content": "hello"}), &ctx).await.unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hello");
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let tool = WriteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");

    tool.execute(json!({"path": "nested/dir/out.txt", "content": "hi"}), &ctx).await.unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("nested/dir/out.txt")).unwrap(), "hi");
}

#[tokio::test]
async fn overwrites_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old").unwrap();

    let tool = WriteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    tool.execute(json!({"path": "out.txt", "content": "new"}), &ctx).await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn declares_unsafe_concurrency() {
    assert_eq!(WriteFileTool.concurrency_safety(), ConcurrencySafety::Unsafe);
}
