use super::*;

#[test]
fn finish_reason_aliases_normalize_to_tool_calls() {
    assert_eq!(FinishReason::from_provider_str("tool_calls"), FinishReason::ToolCalls);
    assert_eq!(FinishReason::from_provider_str("tool_use"), FinishReason::ToolCalls);
    assert_eq!(FinishReason::from_provider_str("function_call"), FinishReason::ToolCalls);
}

#[test]
fn finish_reason_unknown_falls_back_to_stop() {
    assert_eq!(FinishReason::from_provider_str("something_else"), FinishReason::Stop);
}

#[test]
fn user_message_has_single_text_block() {
    let msg = Message::user("hi");
    assert_eq!(msg.content.len(), 1);
    assert!(matches!(msg.content[0], ContentBlock::Text { .. }));
}
