use std::fs;

use cea_error::ErrorExt;
use serde_json::json;
use tempfile::tempdir;

use super::*;

fn ctx(cwd: &std::path::Path) -> ToolContext {
    ToolContext::new(cwd, "session-1")
}

#[tokio::test]
async fn reads_the_skill_markdown_file() {
    let dir = tempdir().unwrap();
    let skills_dir = dir.path().join(".cea").join("skills");
    fs::create_dir_all(&skills_dir).unwrap();
    fs::write(skills_dir.join("deploy.md"), "# Deploy\ndo the thing").unwrap();

    let tool = LoadSkillTool;
    let output = tool.execute(json!({"name": "deploy"}), &ctx(dir.path())).await.unwrap();
    assert!(output.content.as_text().contains("do the thing"));
}

#[tokio::test]
async fn reads_a_bundled_file_via_relative_path() {
    let dir = tempdir().unwrap();
    let skill_dir = dir.path().join(".cea").join("skills").join("deploy");
    fs::create_dir_all(&skill_dir).unwrap();
    fs::write(skill_dir.join("checklist.md"), "- step one").unwrap();

    let tool = LoadSkillTool;
    let output = tool
        .execute(json!({"name": "deploy", "relativePath": "checklist.md"}), &ctx(dir.path()))
        .await
        .unwrap();
    assert!(output.content.as_text().contains("step one"));
}

#[tokio::test]
async fn rejects_names_with_path_separators() {
    let dir = tempdir().unwrap();
    let tool = LoadSkillTool;
    let err = tool.execute(json!({"name": "../etc/passwd"}), &ctx(dir.path())).await.expect_err("rejected");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[tokio::test]
async fn rejects_relative_paths_that_escape_the_skill_directory() {
    let dir = tempdir().unwrap();
    let tool = LoadSkillTool;
    let err = tool
        .execute(json!({"name": "deploy", "relativePath": "../../secret.md"}), &ctx(dir.path()))
        .await
        .expect_err("rejected");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[tokio::test]
async fn reports_missing_skills() {
    let dir = tempdir().unwrap();
    let tool = LoadSkillTool;
    let err = tool.execute(json!({"name": "missing"}), &ctx(dir.path())).await.expect_err("missing");
    assert_eq!(err.status_code(), cea_error::StatusCode::FileNotFound);
}
