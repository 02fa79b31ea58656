//! The tool-calling loop driver.
//!
//! Drives one model turn at a time: stream deltas out as events, dispatch
//! tool calls through the registry as they finalize, detect tool calls that
//! never finalized, decide whether to re-enter for another turn, and once
//! the model stops asking for tools, re-enter a bounded number of times if
//! the todo store still has incomplete items.

use std::sync::Arc;

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_protocol::ContentBlock;
use cea_protocol::LoopConfig;
use cea_protocol::LoopEvent;
use cea_protocol::Message;
use cea_protocol::Role;
use cea_protocol::TokenUsage;
use cea_protocol::loop_config::MANUAL_TOOL_LOOP_MAX_STEPS;
use cea_protocol::loop_config::TODO_CONTINUATION_MAX_LOOPS;
use cea_protocol::model::FinishReason;
use cea_tools::ToolContext;
use cea_tools::ToolRegistry;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::warn;

use crate::accumulator::TurnAccumulator;
use crate::error::LoopError;
use crate::event::GenerateRequest;
use crate::event::ModelClient;
use crate::event::ModelStreamEvent;
use crate::event::ToolDefinition;
use crate::result::LoopOutcome;
use crate::result::StopReason;
use cea_message::MessageHistory;

/// Drives a single session's conversation against a model provider,
/// dispatching tool calls through a registry.
pub struct LoopDriver {
    model: Arc<dyn ModelClient>,
    tools: Arc<ToolRegistry>,
    system_prompt: String,
    config: LoopConfig,
    event_tx: mpsc::Sender<LoopEvent>,
    cancel: CancellationToken,
}

/// Builder for [`LoopDriver`].
pub struct LoopDriverBuilder {
    model: Option<Arc<dyn ModelClient>>,
    tools: Option<Arc<ToolRegistry>>,
    system_prompt: String,
    config: LoopConfig,
    event_tx: Option<mpsc::Sender<LoopEvent>>,
    cancel: CancellationToken,
}

impl LoopDriverBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            tools: None,
            system_prompt: String::new(),
            config: LoopConfig::default(),
            event_tx: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn model(mut self, model: Arc<dyn ModelClient>) -> Self {
        self.model = Some(model);
        self
    }

    pub fn tools(mut self, tools: Arc<ToolRegistry>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn config(mut self, config: LoopConfig) -> Self {
        self.config = config;
        self
    }

    pub fn event_tx(mut self, tx: mpsc::Sender<LoopEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// # Panics
    /// Panics if `model`, `tools`, or `event_tx` have not been set.
    pub fn build(self) -> LoopDriver {
        LoopDriver {
            model: self.model.expect("model is required"),
            tools: self.tools.expect("tools is required"),
            system_prompt: self.system_prompt,
            config: self.config,
            event_tx: self.event_tx.expect("event_tx is required"),
            cancel: self.cancel,
        }
    }
}

impl Default for LoopDriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopDriver {
    pub fn builder() -> LoopDriverBuilder {
        LoopDriverBuilder::new()
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    async fn emit(&self, event: LoopEvent) {
        let _ = self.event_tx.send(event).await;
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .definitions()
            .into_iter()
            .map(|(name, description, parameters)| ToolDefinition { name, description, parameters })
            .collect()
    }

    /// `shell_execute` only times out when its input carries `timeout_ms`;
    /// fill in the configured default when the model omitted it.
    fn with_default_timeout(&self, name: &str, mut input: serde_json::Value) -> serde_json::Value {
        if name == "shell_execute" {
            if let Some(object) = input.as_object_mut() {
                object.entry("timeout_ms").or_insert_with(|| self.config.tool_timeout_ms.into());
            }
        }
        input
    }

    /// Run the loop to completion, starting with `initial_message`.
    pub async fn run(&self, initial_message: &str, history: &mut MessageHistory, ctx: &ToolContext) -> Result<LoopOutcome, LoopError> {
        history.push(Message::user(initial_message));

        let mut turn_number: i32 = 0;
        let mut step_count: u32 = 0;
        let mut continuation_loops: u32 = 0;
        let mut total_usage = TokenUsage::default();
        let mut final_text = String::new();

        'continuation: loop {
            loop {
                if self.cancel.is_cancelled() {
                    self.emit(LoopEvent::Interrupted).await;
                    return Ok(LoopOutcome {
                        stop_reason: StopReason::Interrupted,
                        turns_completed: turn_number,
                        total_usage,
                        final_text,
                    });
                }

                step_count += 1;
                if step_count > MANUAL_TOOL_LOOP_MAX_STEPS {
                    warn!(step_count, "manual tool loop step ceiling reached");
                    self.emit(LoopEvent::MaxTurnsReached).await;
                    return Ok(LoopOutcome {
                        stop_reason: StopReason::MaxTurnsReached,
                        turns_completed: turn_number,
                        total_usage,
                        final_text,
                    });
                }
                if let Some(max) = self.config.max_turns {
                    if turn_number >= max {
                        self.emit(LoopEvent::MaxTurnsReached).await;
                        return Ok(LoopOutcome {
                            stop_reason: StopReason::MaxTurnsReached,
                            turns_completed: turn_number,
                            total_usage,
                            final_text,
                        });
                    }
                }

                turn_number += 1;
                let turn_id = uuid::Uuid::new_v4().to_string();
                debug!(turn_number, turn_id, "starting turn");
                self.emit(LoopEvent::TurnStarted {
                    turn_id: turn_id.clone(),
                    turn_number,
                })
                .await;

                let request = GenerateRequest {
                    system: self.system_prompt.clone(),
                    messages: history.to_model_messages(),
                    tools: self.tool_definitions(),
                };
                let mut stream = self.model.stream(request).await?;

                let mut acc = TurnAccumulator::new();
                let mut turn_usage = TokenUsage::default();
                let mut tool_uses: Vec<ContentBlock> = Vec::new();
                let mut tool_results: Vec<ContentBlock> = Vec::new();

                while let Some(event) = stream.next().await {
                    if self.cancel.is_cancelled() {
                        break;
                    }
                    self.handle_event(event, &turn_id, &mut acc, ctx, &mut tool_uses, &mut tool_results, &mut turn_usage).await;
                }

                for (call_id, name, raw) in acc.malformed_calls() {
                    self.emit(LoopEvent::MalformedToolCall {
                        call_id,
                        name,
                        raw,
                    })
                    .await;
                }
                if acc.all_tool_calls_malformed() {
                    self.emit(LoopEvent::Error {
                        message: "all tool calls failed due to malformed JSON".to_string(),
                        status_code: StatusCode::MalformedToolCall as i32,
                    })
                    .await;
                }

                total_usage.input_tokens += turn_usage.input_tokens;
                total_usage.output_tokens += turn_usage.output_tokens;
                final_text = acc.current_text.clone();

                let mut assistant_content: Vec<ContentBlock> = Vec::new();
                if !acc.current_reasoning.is_empty() {
                    assistant_content.push(ContentBlock::Reasoning { text: acc.current_reasoning.clone() });
                }
                if !acc.current_text.is_empty() {
                    assistant_content.push(ContentBlock::Text { text: acc.current_text.clone() });
                }
                assistant_content.extend(tool_uses);
                let mut to_record = vec![Message::assistant(assistant_content)];
                if !tool_results.is_empty() {
                    to_record.push(Message {
                        role: Role::Tool,
                        content: tool_results,
                    });
                }
                history.add_model_messages(to_record);

                self.emit(LoopEvent::TurnCompleted {
                    turn_id,
                    usage: turn_usage.clone(),
                })
                .await;

                if self.cancel.is_cancelled() {
                    self.emit(LoopEvent::Interrupted).await;
                    return Ok(LoopOutcome {
                        stop_reason: StopReason::Interrupted,
                        turns_completed: turn_number,
                        total_usage,
                        final_text,
                    });
                }

                if acc.last_finish_reason == Some(FinishReason::ToolCalls) {
                    continue;
                }
                break;
            }

            if !self.config.auto_continue_on_incomplete_todos {
                return Ok(LoopOutcome {
                    stop_reason: StopReason::Completed,
                    turns_completed: turn_number,
                    total_usage,
                    final_text,
                });
            }

            let incomplete = ctx.todo_store().incomplete()?;
            if incomplete.is_empty() {
                return Ok(LoopOutcome {
                    stop_reason: StopReason::Completed,
                    turns_completed: turn_number,
                    total_usage,
                    final_text,
                });
            }

            continuation_loops += 1;
            if continuation_loops > TODO_CONTINUATION_MAX_LOOPS {
                self.emit(LoopEvent::AutoContinueLimitReached {
                    loops: continuation_loops - 1,
                })
                .await;
                return Ok(LoopOutcome {
                    stop_reason: StopReason::AutoContinueLimitReached { loops: continuation_loops - 1 },
                    turns_completed: turn_number,
                    total_usage,
                    final_text,
                });
            }

            let reminder = format!(
                "You still have {} incomplete todo item(s):\n{}",
                incomplete.len(),
                incomplete
                    .iter()
                    .map(|item| format!("- {}", item.content))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
            history.push(Message::user(reminder));
            continue 'continuation;
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn handle_event(
        &self,
        event: ModelStreamEvent,
        turn_id: &str,
        acc: &mut TurnAccumulator,
        ctx: &ToolContext,
        tool_uses: &mut Vec<ContentBlock>,
        tool_results: &mut Vec<ContentBlock>,
        turn_usage: &mut TokenUsage,
    ) {
        match event {
            ModelStreamEvent::TextDelta { delta } => {
                acc.current_text.push_str(&delta);
                self.emit(LoopEvent::TextDelta { turn_id: turn_id.to_string(), delta }).await;
            }
            ModelStreamEvent::ReasoningDelta { delta } => {
                acc.current_reasoning.push_str(&delta);
                self.emit(LoopEvent::ReasoningDelta { turn_id: turn_id.to_string(), delta }).await;
            }
            ModelStreamEvent::ToolInputStart { call_id, name } => {
                acc.start_tool_input(&call_id, &name);
            }
            ModelStreamEvent::ToolInputDelta { call_id, delta } => {
                acc.append_tool_input_delta(&call_id, &delta);
            }
            ModelStreamEvent::ToolInputEnd { .. } => {}
            ModelStreamEvent::ToolCall { call_id, name, input } => {
                acc.mark_completed(&call_id);
                self.emit(LoopEvent::ToolCallStarted {
                    call_id: call_id.clone(),
                    name: name.clone(),
                    input: input.clone(),
                })
                .await;

                tool_uses.push(ContentBlock::ToolUse {
                    call_id: call_id.clone(),
                    name: name.clone(),
                    input: input.clone(),
                });

                let dispatch_input = self.with_default_timeout(&name, input);
                let (output_text, is_error) = match self.tools.dispatch(&name, dispatch_input, ctx).await {
                    Ok(output) => (output.content.as_text(), output.is_error),
                    Err(err) => (err.output_msg(), true),
                };

                tool_results.push(ContentBlock::ToolResult {
                    call_id: call_id.clone(),
                    content: output_text.clone(),
                    is_error,
                });
                self.emit(LoopEvent::ToolCallCompleted {
                    call_id,
                    output: output_text,
                    is_error,
                })
                .await;
                acc.current_reasoning.clear();
            }
            ModelStreamEvent::ToolResult { call_id, content } => {
                acc.mark_completed(&call_id);
                tool_results.push(ContentBlock::ToolResult {
                    call_id: call_id.clone(),
                    content: content.clone(),
                    is_error: false,
                });
                self.emit(LoopEvent::ToolCallCompleted { call_id, output: content, is_error: false }).await;
            }
            ModelStreamEvent::ToolError { call_id, message } => {
                acc.mark_completed(&call_id);
                tool_results.push(ContentBlock::ToolResult {
                    call_id: call_id.clone(),
                    content: message.clone(),
                    is_error: true,
                });
                self.emit(LoopEvent::ToolCallCompleted { call_id, output: message, is_error: true }).await;
            }
            ModelStreamEvent::FinishStep { finish_reason, usage } => {
                acc.last_finish_reason = Some(FinishReason::from_provider_str(&finish_reason));
                if let Some(usage) = usage {
                    *turn_usage = usage;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "driver.test.rs"]
mod tests;
