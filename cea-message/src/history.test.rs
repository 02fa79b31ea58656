use cea_protocol::ContentBlock;
use cea_protocol::Message;
use cea_protocol::Role;

use super::*;

#[test]
fn starts_empty() {
    let history = MessageHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
}

#[test]
fn push_appends_without_normalization() {
    let mut history = MessageHistory::new();
    history.push(Message::user("hi there\n\n"));
    assert_eq!(history.len(), 1);
    let ContentBlock::Text { text } = &history.messages()[0].content[0] else {
        panic!("expected text block");
    };
    assert_eq!(text, "hi there\n\n");
}

#[test]
fn to_model_messages_is_a_full_snapshot() {
    let mut history = MessageHistory::new();
    history.push(Message::user("one"));
    history.push(Message::user("two"));
    assert_eq!(history.to_model_messages().len(), 2);
}

#[test]
fn trims_trailing_newlines_from_the_final_assistant_text_block() {
    let mut history = MessageHistory::new();
    let assistant = Message::assistant(vec![
        ContentBlock::Reasoning {
            text: "thinking...".to_string(),
        },
        ContentBlock::Text {
            text: "done\n\n\n".to_string(),
        },
    ]);
    history.add_model_messages(vec![assistant]);

    let ContentBlock::Text { text } = &history.messages()[0].content[1] else {
        panic!("expected text block");
    };
    assert_eq!(text, "done");
    // The reasoning block is untouched.
    let ContentBlock::Reasoning { text } = &history.messages()[0].content[0] else {
        panic!("expected reasoning block");
    };
    assert_eq!(text, "thinking...");
}

#[test]
fn deeply_serializes_error_like_tool_result_content() {
    let mut history = MessageHistory::new();
    let message = Message {
        role: Role::Tool,
        content: vec![ContentBlock::ToolResult {
            call_id: "call-1".to_string(),
            content: r#"{"name":"TypeError","message":"boom","stack":"at x.js:1"}"#.to_string(),
            is_error: true,
        }],
    };
    history.add_model_messages(vec![message]);

    let ContentBlock::ToolResult { content, .. } = &history.messages()[0].content[0] else {
        panic!("expected tool result block");
    };
    let parsed: serde_json::Value = serde_json::from_str(content).expect("valid json");
    assert_eq!(parsed["__error"], serde_json::json!(true));
    assert_eq!(parsed["name"], serde_json::json!("TypeError"));
}

#[test]
fn leaves_plain_text_tool_result_content_untouched() {
    let mut history = MessageHistory::new();
    let message = Message {
        role: Role::Tool,
        content: vec![ContentBlock::ToolResult {
            call_id: "call-1".to_string(),
            content: "file written successfully".to_string(),
            is_error: false,
        }],
    };
    history.add_model_messages(vec![message]);

    let ContentBlock::ToolResult { content, .. } = &history.messages()[0].content[0] else {
        panic!("expected tool result block");
    };
    assert_eq!(content, "file written successfully");
}
