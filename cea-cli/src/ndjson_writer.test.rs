use cea_protocol::TokenUsage;
use cea_protocol::ndjson::NdjsonEventType;
use serde_json::json;

use super::*;

#[test]
fn text_delta_becomes_an_assistant_event() {
    let writer = NdjsonWriter::new("session-1");
    let events = writer.translate(&LoopEvent::TextDelta { turn_id: "t1".to_string(), delta: "hi".to_string() });
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, NdjsonEventType::Assistant);
    assert_eq!(events[0].content.as_deref(), Some("hi"));
}

#[test]
fn tool_call_started_carries_input() {
    let writer = NdjsonWriter::new("session-1");
    let events = writer.translate(&LoopEvent::ToolCallStarted {
        call_id: "call-1".to_string(),
        name: "echo".to_string(),
        input: json!({"x": 1}),
    });
    assert_eq!(events[0].event_type, NdjsonEventType::ToolCall);
    assert_eq!(events[0].tool_call_id.as_deref(), Some("call-1"));
    assert_eq!(events[0].tool_input, Some(json!({"x": 1})));
}

#[test]
fn a_failed_tool_call_result_goes_to_the_error_field() {
    let writer = NdjsonWriter::new("session-1");
    let events = writer.translate(&LoopEvent::ToolCallCompleted {
        call_id: "call-1".to_string(),
        output: "boom".to_string(),
        is_error: true,
    });
    assert_eq!(events[0].event_type, NdjsonEventType::ToolResult);
    assert_eq!(events[0].error.as_deref(), Some("boom"));
    assert!(events[0].output.is_none());
}

#[test]
fn turn_bookkeeping_events_produce_no_ndjson_lines() {
    let writer = NdjsonWriter::new("session-1");
    assert!(writer.translate(&LoopEvent::TurnStarted { turn_id: "t1".to_string(), turn_number: 1 }).is_empty());
    assert!(writer.translate(&LoopEvent::TurnCompleted { turn_id: "t1".to_string(), usage: TokenUsage::default() }).is_empty());
}

#[test]
fn auto_continue_limit_becomes_an_error_event() {
    let writer = NdjsonWriter::new("session-1");
    let events = writer.translate(&LoopEvent::AutoContinueLimitReached { loops: 5 });
    assert_eq!(events[0].event_type, NdjsonEventType::Error);
    assert!(events[0].error.as_deref().unwrap().contains('5'));
}
