use std::fs;

use serde_json::json;
use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn replaces_the_first_occurrence_by_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "foo foo foo").unwrap();

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let output = tool
        .execute(json!({"path": "a.txt", "old_str": "foo", "new_str": "bar"}), &ctx)
        .await
        .unwrap();

    assert!(!output.is_error);
    assert_eq!(fs::read_to_string(&path).unwrap(), "bar foo foo");
}

#[tokio::test]
async fn replaces_all_occurrences_when_requested() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "foo foo foo").unwrap();

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    tool.execute(json!({"path": "a.txt", "old_str": "foo", "new_str": "bar", "replace_all": true}), &ctx)
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "bar bar bar");
}

#[tokio::test]
async fn creates_a_new_file_when_old_str_is_empty_and_file_is_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    tool.execute(json!({"path": "new.txt", "old_str": "", "new_str": "hello"}), &ctx).await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}

#[tokio::test]
async fn reports_a_diagnostic_error_output_on_no_match() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "line one\nline two\nline three").unwrap();

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let output = tool
        .execute(json!({"path": "a.txt", "old_str": "lime two", "new_str": "x"}), &ctx)
        .await
        .unwrap();

    assert!(output.is_error);
    let text = output.content.as_text();
    assert!(text.contains("Closest match"));
    assert!(text.contains("line two"));
}

#[tokio::test]
async fn applies_a_hashline_batch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "one\ntwo\nthree").unwrap();

    let line_two_hash = cea_hashline::line_hash(2, "two");
    let edits = json!([{
        "kind": "replace",
        "pos": { "line": 2, "hash": line_two_hash },
        "lines": ["TWO"],
    }]);

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let output = tool.execute(json!({"path": "a.txt", "edits": edits}), &ctx).await.unwrap();

    assert!(!output.is_error);
    assert_eq!(fs::read_to_string(&path).unwrap(), "one\nTWO\nthree");
    assert!(output.content.as_text().contains("OK - hashline edit"));
}

#[tokio::test]
async fn rejects_a_stale_expected_file_hash() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "one\ntwo\nthree").unwrap();

    let line_two_hash = cea_hashline::line_hash(2, "two");
    let edits = json!([{
        "kind": "replace",
        "pos": { "line": 2, "hash": line_two_hash },
        "lines": ["TWO"],
    }]);

    let tool = EditFileTool;
    let ctx = ToolContext::new(dir.path(), "session-1");
    let err = tool
        .execute(json!({"path": "a.txt", "edits": edits, "expected_file_hash": "deadbeef"}), &ctx)
        .await
        .expect_err("stale hash");
    assert!(matches!(err, ToolError::Hashline { .. }));
}

#[test]
fn levenshtein_distance_counts_single_character_edits() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("same", "same"), 0);
}
