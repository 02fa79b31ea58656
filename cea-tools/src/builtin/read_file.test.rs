use std::fs;

use cea_error::ErrorExt;
use serde_json::json;
use tempfile::tempdir;

use super::*;

fn ctx(cwd: &std::path::Path) -> ToolContext {
    ToolContext::new(cwd, "session-1")
}

#[tokio::test]
async fn reads_a_file_by_relative_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "one\ntwo\nthree").unwrap();

    let tool = ReadFileTool;
    let output = tool.execute(json!({"path": "hello.txt"}), &ctx(dir.path())).await.unwrap();
    let text = output.content.as_text();

    assert!(text.contains("one"));
    assert!(text.contains("three"));
    assert!(text.contains("file_hash:"));
}

#[tokio::test]
async fn rejects_negative_offset() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "one").unwrap();

    let tool = ReadFileTool;
    let err = tool
        .execute(json!({"path": "hello.txt", "offset": -1}), &ctx(dir.path()))
        .await
        .expect_err("negative offset");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[tokio::test]
async fn rejects_zero_limit() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), "one").unwrap();

    let tool = ReadFileTool;
    let err = tool
        .execute(json!({"path": "hello.txt", "limit": 0}), &ctx(dir.path()))
        .await
        .expect_err("zero limit");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[tokio::test]
async fn reports_missing_files() {
    let dir = tempdir().unwrap();

    let tool = ReadFileTool;
    let err = tool
        .execute(json!({"path": "missing.txt"}), &ctx(dir.path()))
        .await
        .expect_err("missing");
    assert_eq!(err.status_code(), cea_error::StatusCode::FileNotFound);
}
