use serde_json::json;
use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn saves_todos_and_reports_incomplete_count() {
    let dir = tempdir().unwrap();
    let tool = TodoWriteTool;
    let ctx = ToolContext::new(dir.path(), "session-1");

    let output = tool
        .execute(
            json!({
                "todos": [
                    {"id": "1", "content": "write code", "status": "in_progress", "priority": "high"},
                    {"id": "2", "content": "ship it", "status": "completed", "priority": "low"},
                ],
            }),
            &ctx,
        )
        .await
        .unwrap();

    assert!(output.content.as_text().contains("1 incomplete"));
    assert_eq!(output.modifiers.len(), 1);
    match &output.modifiers[0] {
        cea_protocol::ContextModifier::TodosUpdated { incomplete_count } => assert_eq!(*incomplete_count, 1),
    }
    assert!(dir.path().join(".cea/session-1.json").exists());
    assert!(dir.path().join(".cea/session-1.md").exists());
}

#[tokio::test]
async fn rejects_empty_content() {
    let dir = tempdir().unwrap();
    let tool = TodoWriteTool;
    let ctx = ToolContext::new(dir.path(), "session-1");

    let err = tool
        .execute(
            json!({"todos": [{"id": "1", "content": "", "status": "pending", "priority": "low"}]}),
            &ctx,
        )
        .await
        .expect_err("empty content");
    assert!(matches!(err, ToolError::Todo { .. }));
}
