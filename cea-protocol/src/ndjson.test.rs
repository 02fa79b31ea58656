use chrono::TimeZone;
use chrono::Utc;

use super::*;

#[test]
fn minimal_event_omits_optional_fields() {
    let now = Utc.timestamp_opt(0, 0).single().expect("valid timestamp");
    let event = NdjsonEvent::new(now, NdjsonEventType::User, "session-1");
    let line = event.to_line().expect("serializable");
    assert!(!line.contains("tool_call_id"));
    assert!(line.contains("\"type\":\"user\""));
    assert!(line.contains("\"sessionId\":\"session-1\""));
}

#[test]
fn assistant_event_carries_content() {
    let now = Utc.timestamp_opt(0, 0).single().expect("valid timestamp");
    let mut event = NdjsonEvent::new(now, NdjsonEventType::Assistant, "session-1");
    event.content = Some("hello".to_string());
    let line = event.to_line().expect("serializable");
    assert!(line.contains("\"content\":\"hello\""));
}

#[test]
fn tool_result_event_carries_exit_code() {
    let now = Utc.timestamp_opt(0, 0).single().expect("valid timestamp");
    let mut event = NdjsonEvent::new(now, NdjsonEventType::ToolResult, "session-1");
    event.tool_call_id = Some("call-1".to_string());
    event.exit_code = Some(0);
    let line = event.to_line().expect("serializable");
    assert!(line.contains("\"type\":\"tool_result\""));
    assert!(line.contains("\"exit_code\":0"));
}
