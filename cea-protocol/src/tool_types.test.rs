use super::*;

#[test]
fn tool_output_text_defaults() {
    let out = ToolOutput::text("hello");
    assert!(!out.is_error);
    assert_eq!(out.content.as_text(), "hello");
}

#[test]
fn tool_output_error_flag() {
    let out = ToolOutput::error("boom");
    assert!(out.is_error);
}

#[test]
fn structured_as_text_is_json() {
    let out = ToolOutput::structured(serde_json::json!({"a": 1}));
    assert_eq!(out.content.as_text(), "{\"a\":1}");
}

#[test]
fn validation_result_valid() {
    assert!(ValidationResult::valid().is_valid());
    assert!(!ValidationResult::error("bad").is_valid());
}

#[test]
fn validation_error_display_with_path() {
    let err = ValidationError::with_path("must be a string", "path");
    assert_eq!(err.to_string(), "path: must be a string");
}
