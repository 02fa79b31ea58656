//! A streaming `ModelClient` against an OpenAI-compatible chat-completions
//! endpoint.
//!
//! The wire format this crate consumes is an external collaborator's
//! contract, not something owned here: only enough of it is implemented to
//! translate a real provider's SSE stream into `cea_loop`'s
//! `ModelStreamEvent`s. Unlike a full multi-provider SDK, this client reads
//! the whole response body before yielding events — the loop driver still
//! sees a `BoxStream`, but nothing here depends on incremental backpressure.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use cea_loop::GenerateRequest;
use cea_loop::LoopError;
use cea_loop::ModelClient;
use cea_loop::ModelStreamEvent;
use cea_protocol::ContentBlock;
use cea_protocol::Message;
use cea_protocol::Role;
use cea_protocol::TokenUsage;
use futures::stream;
use futures::stream::BoxStream;
use futures::stream::StreamExt;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

/// Environment variable holding the bearer token for the provider.
pub const API_KEY_ENV: &str = "CEA_MODEL_API_KEY";
/// Environment variable overriding the API base; defaults to OpenAI's.
pub const API_BASE_ENV: &str = "CEA_MODEL_API_BASE";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

pub struct HttpModelClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    /// Request `reasoning_effort: "high"`, per `--think`.
    think: bool,
    /// Retry with `stream: false` if the provider rejects a streaming request.
    tool_fallback: bool,
}

impl HttpModelClient {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>, think: bool, tool_fallback: bool) -> Self {
        let api_base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_base_url(model, api_key, api_base, think, tool_fallback)
    }

    /// As [`Self::new`], but pointed at an explicit base URL instead of
    /// reading `CEA_MODEL_API_BASE`. Used by tests against a mock server.
    pub fn with_base_url(
        model: impl Into<String>,
        api_key: impl Into<String>,
        api_base: impl Into<String>,
        think: bool,
        tool_fallback: bool,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            api_base: api_base.into(),
            model: model.into(),
            think,
            tool_fallback,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    async fn post(&self, body: &Value) -> Result<reqwest::Response, LoopError> {
        self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|err| LoopError::stream_failed(format!("request failed: {err}")))
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn stream(&self, request: GenerateRequest) -> Result<BoxStream<'static, ModelStreamEvent>, LoopError> {
        let streaming_body = build_request_body(&self.model, &request, self.think, true);
        let response = self.post(&streaming_body).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            if !self.tool_fallback {
                return Err(LoopError::stream_failed(format!("provider returned {status}: {text}")));
            }
            tracing::warn!(status, %text, "provider rejected streaming request, retrying without it");
            let fallback_body = build_request_body(&self.model, &request, self.think, false);
            let fallback_response = self.post(&fallback_body).await?;
            if !fallback_response.status().is_success() {
                let status = fallback_response.status().as_u16();
                let text = fallback_response.text().await.unwrap_or_default();
                return Err(LoopError::stream_failed(format!("provider returned {status}: {text}")));
            }
            let completion: Value = fallback_response
                .json()
                .await
                .map_err(|err| LoopError::stream_failed(format!("decoding response: {err}")))?;
            return Ok(stream::iter(decode_non_streaming_response(&completion)).boxed());
        }

        let mut raw = Vec::new();
        let mut body_stream = response.bytes_stream();
        while let Some(chunk) = body_stream.next().await {
            let chunk: Bytes = chunk.map_err(|err| LoopError::stream_failed(format!("reading response: {err}")))?;
            raw.extend_from_slice(&chunk);
        }

        let events = decode_sse_events(&raw);
        Ok(stream::iter(events).boxed())
    }
}

fn build_request_body(model: &str, request: &GenerateRequest, think: bool, stream: bool) -> Value {
    let messages: Vec<Value> = request.messages.iter().flat_map(wire_messages).collect();
    let mut messages_with_system = Vec::with_capacity(messages.len() + 1);
    if !request.system.is_empty() {
        messages_with_system.push(json!({"role": "system", "content": request.system}));
    }
    messages_with_system.extend(messages);

    let tools: Vec<Value> = request
        .tools
        .iter()
        .map(|tool| {
            json!({
                "type": "function",
                "function": {
                    "name": tool.name,
                    "description": tool.description,
                    "parameters": tool.parameters,
                },
            })
        })
        .collect();

    let mut body = json!({
        "model": model,
        "messages": messages_with_system,
        "stream": stream,
    });
    if stream {
        body["stream_options"] = json!({"include_usage": true});
    }
    if !tools.is_empty() {
        body["tools"] = Value::Array(tools);
    }
    if think {
        body["reasoning_effort"] = Value::String("high".to_string());
    }
    body
}

/// Decode a non-streaming `{choices: [{message, finish_reason}], usage}`
/// completion into the same event shape a streamed response would have
/// produced, minus the incremental deltas.
fn decode_non_streaming_response(completion: &Value) -> Vec<ModelStreamEvent> {
    let mut events = Vec::new();
    let choice = completion.get("choices").and_then(|c| c.as_array()).and_then(|c| c.first());

    if let Some(choice) = choice {
        let message = choice.get("message");
        if let Some(text) = message.and_then(|m| m.get("content")).and_then(|c| c.as_str()) {
            if !text.is_empty() {
                events.push(ModelStreamEvent::TextDelta { delta: text.to_string() });
            }
        }
        if let Some(calls) = message.and_then(|m| m.get("tool_calls")).and_then(|c| c.as_array()) {
            for call in calls {
                let Some(call_id) = call.get("id").and_then(|v| v.as_str()) else { continue };
                let Some(function) = call.get("function") else { continue };
                let name = function.get("name").and_then(|v| v.as_str()).unwrap_or_default().to_string();
                let arguments = function.get("arguments").and_then(|v| v.as_str()).unwrap_or("{}");
                events.push(ModelStreamEvent::ToolInputStart { call_id: call_id.to_string(), name: name.clone() });
                events.push(ModelStreamEvent::ToolInputEnd { call_id: call_id.to_string() });
                if let Ok(input) = serde_json::from_str::<Value>(arguments) {
                    events.push(ModelStreamEvent::ToolCall { call_id: call_id.to_string(), name, input });
                }
            }
        }
    }

    let finish_reason = choice
        .and_then(|c| c.get("finish_reason"))
        .and_then(|v| v.as_str())
        .unwrap_or("stop")
        .to_string();
    let usage = completion.get("usage").and_then(|u| serde_json::from_value::<ChunkUsage>(u.clone()).ok());
    events.push(ModelStreamEvent::FinishStep {
        finish_reason,
        usage: usage.map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens)),
    });

    events
}

/// One `cea_protocol::Message` may expand into several wire messages: a
/// `Role::Tool` message groups multiple `ToolResult` blocks, but the
/// OpenAI-compatible wire format wants one `tool` message per call id.
fn wire_messages(message: &Message) -> Vec<Value> {
    match message.role {
        Role::User => vec![json!({"role": "user", "content": text_of(&message.content)})],
        Role::Assistant => {
            let text = text_of(&message.content);
            let tool_calls: Vec<Value> = message
                .content
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::ToolUse { call_id, name, input } => Some(json!({
                        "id": call_id,
                        "type": "function",
                        "function": {"name": name, "arguments": input.to_string()},
                    })),
                    _ => None,
                })
                .collect();

            let mut wire = json!({"role": "assistant"});
            if !text.is_empty() {
                wire["content"] = Value::String(text);
            }
            if !tool_calls.is_empty() {
                wire["tool_calls"] = Value::Array(tool_calls);
            }
            vec![wire]
        }
        Role::Tool => message
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::ToolResult { call_id, content, .. } => {
                    Some(json!({"role": "tool", "tool_call_id": call_id, "content": content}))
                }
                _ => None,
            })
            .collect(),
    }
}

fn text_of(content: &[ContentBlock]) -> String {
    content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChunk {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    #[serde(default)]
    usage: Option<ChunkUsage>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ChunkToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ChunkToolCall {
    index: usize,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    function: Option<ChunkFunction>,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkFunction {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    arguments: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
struct ChunkUsage {
    #[serde(default)]
    prompt_tokens: i64,
    #[serde(default)]
    completion_tokens: i64,
}

#[derive(Default)]
struct PendingCall {
    id: Option<String>,
    name: Option<String>,
    arguments: String,
    started: bool,
}

/// Parse an SSE byte body (`data: {...}\n\n`, terminated by `data: [DONE]`)
/// into the driver's event stream, accumulating tool-call argument deltas by
/// their `index` into a single finalized `ToolCall` event per index.
fn decode_sse_events(raw: &[u8]) -> Vec<ModelStreamEvent> {
    let text = String::from_utf8_lossy(raw);
    let mut events = Vec::new();
    let mut pending_calls: BTreeMap<usize, PendingCall> = BTreeMap::new();
    let mut last_usage: Option<TokenUsage> = None;
    let mut last_finish_reason: Option<String> = None;

    for line in text.lines() {
        let Some(data) = line.strip_prefix("data:") else { continue };
        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            continue;
        }
        let Ok(chunk) = serde_json::from_str::<ChatCompletionChunk>(data) else { continue };
        if let Some(usage) = chunk.usage {
            last_usage = Some(TokenUsage::new(usage.prompt_tokens, usage.completion_tokens));
        }
        for choice in chunk.choices {
            if let Some(text) = choice.delta.content {
                if !text.is_empty() {
                    events.push(ModelStreamEvent::TextDelta { delta: text });
                }
            }
            if let Some(text) = choice.delta.reasoning_content {
                if !text.is_empty() {
                    events.push(ModelStreamEvent::ReasoningDelta { delta: text });
                }
            }
            if let Some(tool_calls) = choice.delta.tool_calls {
                for call in tool_calls {
                    let pending = pending_calls.entry(call.index).or_default();
                    if let Some(id) = call.id {
                        pending.id = Some(id);
                    }
                    if let Some(function) = call.function {
                        if let Some(name) = function.name {
                            pending.name = Some(name);
                        }
                        if let Some(arguments) = function.arguments {
                            if !pending.started {
                                if let (Some(id), Some(name)) = (pending.id.clone(), pending.name.clone()) {
                                    events.push(ModelStreamEvent::ToolInputStart { call_id: id, name });
                                    pending.started = true;
                                }
                            }
                            if pending.started {
                                if let Some(id) = pending.id.clone() {
                                    events.push(ModelStreamEvent::ToolInputDelta { call_id: id, delta: arguments.clone() });
                                }
                            }
                            pending.arguments.push_str(&arguments);
                        }
                    }
                }
            }
            if let Some(reason) = choice.finish_reason {
                last_finish_reason = Some(reason);
            }
        }
    }

    for (_, pending) in pending_calls {
        let Some(call_id) = pending.id else { continue };
        let name = pending.name.unwrap_or_default();
        events.push(ModelStreamEvent::ToolInputEnd { call_id: call_id.clone() });
        if let Ok(input) = serde_json::from_str::<Value>(&pending.arguments) {
            events.push(ModelStreamEvent::ToolCall { call_id, name, input });
        }
        // Else: leave it unfinalized so cea_loop's accumulator reports it as
        // a malformed tool call, the same as a provider that truncates mid-stream.
    }

    events.push(ModelStreamEvent::FinishStep {
        finish_reason: last_finish_reason.unwrap_or_else(|| "stop".to_string()),
        usage: last_usage,
    });

    events
}

#[cfg(test)]
#[path = "http_model.test.rs"]
mod tests;
