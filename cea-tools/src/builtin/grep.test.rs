use std::fs;

use serde_json::json;
use tempfile::tempdir;

use super::*;

fn ctx(cwd: &std::path::Path) -> ToolContext {
    ToolContext::new(cwd, "session-1")
}

#[test]
fn parses_match_lines_with_colon_separator() {
    let parsed = parse_rg_line("src/main.rs:42:let x = 1;").unwrap();
    assert_eq!(parsed, ("src/main.rs".to_string(), 42, "let x = 1;".to_string()));
}

#[test]
fn parses_context_lines_with_dash_separator() {
    let parsed = parse_rg_line("src/main.rs-41-fn main() {").unwrap();
    assert_eq!(parsed, ("src/main.rs".to_string(), 41, "fn main() {".to_string()));
}

#[test]
fn returns_none_for_lines_without_a_line_number() {
    assert_eq!(parse_rg_line("--"), None);
}

#[tokio::test]
async fn finds_matches_and_rewrites_hashline_tags() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("needle.txt"), "alpha\nneedle here\nomega\n").unwrap();

    let tool = GrepTool;
    let output = tool.execute(json!({"pattern": "needle"}), &ctx(dir.path())).await.unwrap();
    let text = output.content.as_text();

    assert!(text.contains("needle.txt:2#"));
    assert!(text.contains("needle here"));
}

#[tokio::test]
async fn reports_no_matches_as_empty_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.txt"), "nothing interesting\n").unwrap();

    let tool = GrepTool;
    let output = tool.execute(json!({"pattern": "needle"}), &ctx(dir.path())).await.unwrap();
    assert_eq!(output.content.as_text(), "");
}
