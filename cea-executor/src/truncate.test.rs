use super::*;

#[test]
fn leaves_small_output_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = truncate("hello\nworld\n", dir.path());
    assert_eq!(result.text, "hello\nworld\n");
    assert!(!result.truncated);
    assert!(result.spilled_path.is_none());
}

#[test]
fn truncates_and_spills_when_line_count_exceeds_budget() {
    let dir = tempfile::tempdir().expect("tempdir");
    let lines: Vec<String> = (0..5000).map(|n| format!("line{n}")).collect();
    let text = lines.join("\n");

    let result = truncate(&text, dir.path());

    assert!(result.truncated);
    let spilled = result.spilled_path.expect("spilled to a file");
    assert!(spilled.exists());
    let spilled_content = std::fs::read_to_string(&spilled).expect("read spilled file");
    assert_eq!(spilled_content, text);

    assert!(result.text.contains("line0"));
    assert!(result.text.contains("line4999"));
    assert!(result.text.contains("lines omitted"));
    assert!(result.text.lines().count() <= 2000);
}

#[test]
fn truncates_when_only_byte_budget_is_exceeded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = "x".repeat(60 * 1024);
    let result = truncate(&text, dir.path());
    assert!(result.truncated);
    assert!(result.text.len() <= 50 * 1024 + 4096);
}
