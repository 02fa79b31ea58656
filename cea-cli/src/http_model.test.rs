use cea_protocol::Message;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::*;

fn sse(chunks: &[&str]) -> Vec<u8> {
    let mut body = String::new();
    for chunk in chunks {
        body.push_str("data: ");
        body.push_str(chunk);
        body.push_str("\n\n");
    }
    body.push_str("data: [DONE]\n\n");
    body.into_bytes()
}

#[test]
fn decodes_a_plain_text_turn() {
    let raw = sse(&[
        r#"{"choices":[{"delta":{"content":"hel"},"finish_reason":null}]}"#,
        r#"{"choices":[{"delta":{"content":"lo"},"finish_reason":"stop"}],"usage":{"prompt_tokens":3,"completion_tokens":2}}"#,
    ]);

    let events = decode_sse_events(&raw);
    let deltas: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            ModelStreamEvent::TextDelta { delta } => Some(delta.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(deltas, vec!["hel", "lo"]);

    match events.last() {
        Some(ModelStreamEvent::FinishStep { finish_reason, usage }) => {
            assert_eq!(finish_reason, "stop");
            let usage = usage.as_ref().expect("usage present");
            assert_eq!(usage.input_tokens, 3);
            assert_eq!(usage.output_tokens, 2);
        }
        other => panic!("unexpected last event: {other:?}"),
    }
}

#[test]
fn decodes_a_finalized_tool_call_accumulated_across_chunks() {
    let raw = sse(&[
        r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"id":"call-1","function":{"name":"echo","arguments":"{\"x\":"}}]},"finish_reason":null}]}"#,
        r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"function":{"arguments":"1}"}}]},"finish_reason":"tool_calls"}]}"#,
    ]);

    let events = decode_sse_events(&raw);
    assert!(events.iter().any(|e| matches!(e, ModelStreamEvent::ToolInputStart { call_id, name } if call_id == "call-1" && name == "echo")));
    assert!(
        events
            .iter()
            .any(|e| matches!(e, ModelStreamEvent::ToolCall { call_id, name, input } if call_id == "call-1" && name == "echo" && input == &serde_json::json!({"x": 1})))
    );
}

#[test]
fn leaves_a_truncated_tool_call_unfinalized() {
    let raw = sse(&[
        r#"{"choices":[{"delta":{"tool_calls":[{"index":0,"id":"call-1","function":{"name":"echo","arguments":"{\"x\":"}}]},"finish_reason":"tool_calls"}]}"#,
    ]);

    let events = decode_sse_events(&raw);
    assert!(events.iter().any(|e| matches!(e, ModelStreamEvent::ToolInputStart { .. })));
    assert!(!events.iter().any(|e| matches!(e, ModelStreamEvent::ToolCall { .. })));
}

#[test]
fn builds_a_wire_body_with_system_prompt_and_tool_results_split_per_call() {
    let request = GenerateRequest {
        system: "be helpful".to_string(),
        messages: vec![
            Message::user("hi"),
            Message::assistant(vec![ContentBlock::ToolUse {
                call_id: "call-1".to_string(),
                name: "echo".to_string(),
                input: serde_json::json!({"x": 1}),
            }]),
            Message {
                role: Role::Tool,
                content: vec![
                    ContentBlock::ToolResult { call_id: "call-1".to_string(), content: "ok".to_string(), is_error: false },
                    ContentBlock::ToolResult { call_id: "call-2".to_string(), content: "also ok".to_string(), is_error: false },
                ],
            },
        ],
        tools: vec![],
    };

    let body = build_request_body("gpt-4o", &request, false, true);
    let messages = body["messages"].as_array().expect("messages array");
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[2]["tool_calls"][0]["id"], "call-1");
    // The grouped tool-role message splits into two wire messages, one per call id.
    assert_eq!(messages[3]["tool_call_id"], "call-1");
    assert_eq!(messages[4]["tool_call_id"], "call-2");
    assert!(body.get("reasoning_effort").is_none());
}

#[test]
fn think_flag_requests_high_reasoning_effort() {
    let request = GenerateRequest { system: String::new(), messages: vec![Message::user("hi")], tools: vec![] };
    let body = build_request_body("gpt-4o", &request, true, true);
    assert_eq!(body["reasoning_effort"], "high");
}

#[test]
fn non_streaming_response_decodes_a_tool_call_and_usage() {
    let completion = serde_json::json!({
        "choices": [{
            "message": {
                "content": "",
                "tool_calls": [{
                    "id": "call-1",
                    "function": {"name": "echo", "arguments": "{\"x\":1}"}
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 7}
    });

    let events = decode_non_streaming_response(&completion);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, ModelStreamEvent::ToolCall { call_id, name, input } if call_id == "call-1" && name == "echo" && input == &serde_json::json!({"x": 1})))
    );
    match events.last() {
        Some(ModelStreamEvent::FinishStep { finish_reason, usage }) => {
            assert_eq!(finish_reason, "tool_calls");
            let usage = usage.as_ref().expect("usage present");
            assert_eq!(usage.input_tokens, 5);
            assert_eq!(usage.output_tokens, 7);
        }
        other => panic!("unexpected last event: {other:?}"),
    }
}

#[tokio::test]
async fn streams_text_from_a_mock_provider() {
    let mock_server = MockServer::start().await;
    let sse_body = String::from_utf8(sse(&[
        r#"{"choices":[{"delta":{"content":"hi"},"finish_reason":"stop"}],"usage":{"prompt_tokens":1,"completion_tokens":1}}"#,
    ]))
    .expect("valid utf8");

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(sse_body, "text/event-stream"))
        .mount(&mock_server)
        .await;

    let client = HttpModelClient::with_base_url("gpt-4o", "test-key", mock_server.uri(), false, false);
    let request = GenerateRequest { system: String::new(), messages: vec![Message::user("hi")], tools: vec![] };
    let events: Vec<ModelStreamEvent> = client.stream(request).await.expect("stream succeeds").collect().await;

    assert!(events.iter().any(|e| matches!(e, ModelStreamEvent::TextDelta { delta } if delta == "hi")));
}

#[tokio::test]
async fn falls_back_to_a_non_streaming_request_when_streaming_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(wiremock::matchers::body_string_contains("\"stream\":true"))
        .respond_with(ResponseTemplate::new(400).set_body_string("streaming not supported"))
        .mount(&mock_server)
        .await;

    let completion = serde_json::json!({
        "choices": [{"message": {"content": "hi"}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 1, "completion_tokens": 1}
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(wiremock::matchers::body_string_contains("\"stream\":false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&completion))
        .mount(&mock_server)
        .await;

    let client = HttpModelClient::with_base_url("gpt-4o", "test-key", mock_server.uri(), false, true);
    let request = GenerateRequest { system: String::new(), messages: vec![Message::user("hi")], tools: vec![] };
    let events: Vec<ModelStreamEvent> = client.stream(request).await.expect("fallback succeeds").collect().await;

    assert!(events.iter().any(|e| matches!(e, ModelStreamEvent::TextDelta { delta } if delta == "hi")));
}
