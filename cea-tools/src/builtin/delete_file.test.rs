use std::fs;

use cea_error::ErrorExt;
use serde_json::json;
use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn deletes_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "x").unwrap();

    let tool = DeleteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    tool.execute(json!({"path": "a.txt"}), &ctx).await.unwrap();

    assert!(!path.exists());
}

#[tokio::test]
async fn refuses_a_directory_without_recursive() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    let tool = DeleteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let err = tool.execute(json!({"path": "sub"}), &ctx).await.expect_err("refused");

    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
    assert!(sub.exists());
}

#[tokio::test]
async fn deletes_a_directory_with_recursive() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("inner.txt"), "x").unwrap();

    let tool = DeleteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    tool.execute(json!({"path": "sub", "recursive": true}), &ctx).await.unwrap();

    assert!(!sub.exists());
}

#[tokio::test]
async fn reports_missing_files() {
    let dir = tempdir().unwrap();

    let tool = DeleteFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let err = tool.execute(json!({"path": "missing.txt"}), &ctx).await.expect_err("missing");

    assert_eq!(err.status_code(), cea_error::StatusCode::FileNotFound);
}

#[test]
fn needs_approval() {
    assert!(DeleteFileTool.needs_approval());
}
