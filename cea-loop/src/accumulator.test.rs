use cea_protocol::model::FinishReason;

use super::*;

#[test]
fn tracks_a_call_that_completes() {
    let mut acc = TurnAccumulator::new();
    acc.start_tool_input("call-1", "read_file");
    acc.append_tool_input_delta("call-1", r#"{"path":"#);
    acc.append_tool_input_delta("call-1", r#""a.rs"}"#);
    acc.mark_completed("call-1");

    assert!(acc.malformed_calls().is_empty());
    assert!(acc.pending_tool_calls.is_empty());
    assert!(acc.completed_tool_call_ids.contains("call-1"));
}

#[test]
fn reports_a_call_that_never_finalized() {
    let mut acc = TurnAccumulator::new();
    acc.start_tool_input("call-1", "grep");
    acc.append_tool_input_delta("call-1", r#"{"pattern": "#);

    let malformed = acc.malformed_calls();
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].0, "call-1");
    assert_eq!(malformed[0].1, "grep");
    assert_eq!(malformed[0].2, r#"{"pattern": "#);
}

#[test]
fn truncates_the_raw_buffer_to_500_chars() {
    let mut acc = TurnAccumulator::new();
    acc.start_tool_input("call-1", "shell_execute");
    acc.append_tool_input_delta("call-1", &"x".repeat(1000));

    let malformed = acc.malformed_calls();
    assert_eq!(malformed[0].2.chars().count(), 500);
}

#[test]
fn all_malformed_requires_tool_calls_finish_reason_and_no_completions() {
    let mut acc = TurnAccumulator::new();
    acc.start_tool_input("call-1", "grep");
    acc.last_finish_reason = Some(FinishReason::ToolCalls);
    assert!(acc.all_tool_calls_malformed());

    acc.mark_completed("call-1");
    assert!(!acc.all_tool_calls_malformed());
}

#[test]
fn no_pending_calls_is_never_all_malformed() {
    let mut acc = TurnAccumulator::new();
    acc.last_finish_reason = Some(FinishReason::ToolCalls);
    assert!(!acc.all_tool_calls_malformed());
}
