use std::sync::Arc;
use std::sync::Mutex;

use cea_protocol::ToolOutput;
use cea_tools::Tool;
use cea_tools::ToolContext;
use cea_tools::ToolRegistry;
use cea_todo::TodoItem;
use cea_todo::TodoPriority;
use cea_todo::TodoStatus;
use futures::stream;
use futures::stream::BoxStream;
use futures::stream::StreamExt;
use serde_json::Value;
use serde_json::json;

use super::*;
use cea_message::MessageHistory;

/// A tool that always succeeds, so driver tests don't need real file I/O.
struct EchoTool;

#[async_trait::async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "echoes its input"
    }
    fn input_schema(&self) -> Value {
        json!({"type": "object"})
    }
    async fn execute(&self, input: Value, _ctx: &ToolContext) -> Result<ToolOutput, cea_tools::ToolError> {
        Ok(ToolOutput::text(input.to_string()))
    }
}

fn registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool);
    Arc::new(registry)
}

/// Replays a fixed script of turns: each call to `stream` pops the next
/// turn's events off the front of the script.
struct ScriptedModel {
    turns: Mutex<Vec<Vec<ModelStreamEvent>>>,
}

impl ScriptedModel {
    fn new(turns: Vec<Vec<ModelStreamEvent>>) -> Self {
        Self { turns: Mutex::new(turns) }
    }
}

#[async_trait::async_trait]
impl ModelClient for ScriptedModel {
    async fn stream(&self, _request: GenerateRequest) -> Result<BoxStream<'static, ModelStreamEvent>, LoopError> {
        let mut turns = self.turns.lock().expect("lock");
        let events = if turns.is_empty() { Vec::new() } else { turns.remove(0) };
        Ok(stream::iter(events).boxed())
    }
}

fn finish(reason: &str) -> ModelStreamEvent {
    ModelStreamEvent::FinishStep {
        finish_reason: reason.to_string(),
        usage: Some(TokenUsage::new(10, 5)),
    }
}

#[tokio::test]
async fn completes_on_a_stop_finish_reason() {
    let model = Arc::new(ScriptedModel::new(vec![vec![
        ModelStreamEvent::TextDelta { delta: "hello".to_string() },
        finish("stop"),
    ]]));
    let (tx, _rx) = mpsc::channel(64);
    let driver = LoopDriver::builder().model(model).tools(registry()).event_tx(tx).build();

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = ToolContext::new(dir.path(), "session-1");
    let mut history = MessageHistory::new();

    let outcome = driver.run("go", &mut history, &ctx).await.expect("run");
    assert_eq!(outcome.stop_reason, StopReason::Completed);
    assert_eq!(outcome.final_text, "hello");
    assert_eq!(outcome.turns_completed, 1);
}

#[tokio::test]
async fn dispatches_a_tool_call_then_stops_on_the_next_turn() {
    let model = Arc::new(ScriptedModel::new(vec![
        vec![
            ModelStreamEvent::ToolCall {
                call_id: "call-1".to_string(),
                name: "echo".to_string(),
                input: json!({"x": 1}),
            },
            finish("tool_calls"),
        ],
        vec![ModelStreamEvent::TextDelta { delta: "done".to_string() }, finish("stop")],
    ]));
    let (tx, mut rx) = mpsc::channel(64);
    let driver = LoopDriver::builder().model(model).tools(registry()).event_tx(tx).build();

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = ToolContext::new(dir.path(), "session-1");
    let mut history = MessageHistory::new();

    let outcome = driver.run("go", &mut history, &ctx).await.expect("run");
    assert_eq!(outcome.stop_reason, StopReason::Completed);
    assert_eq!(outcome.turns_completed, 2);

    let mut saw_tool_completed = false;
    while let Ok(event) = rx.try_recv() {
        if let LoopEvent::ToolCallCompleted { is_error, .. } = event {
            saw_tool_completed = true;
            assert!(!is_error);
        }
    }
    assert!(saw_tool_completed);

    // Two messages recorded per tool turn: the assistant tool-use message
    // and the tool-result message, then one more assistant message for the
    // final "done" turn.
    assert_eq!(history.messages().len(), 4);
}

#[tokio::test]
async fn reports_a_tool_call_that_never_finalized() {
    // finish_reason is "tool_calls" on every turn here, so bound the run
    // with max_turns to keep the test from looping on an unproductive
    // script forever.
    let malformed_turn = || {
        vec![
            ModelStreamEvent::ToolInputStart { call_id: "call-1".to_string(), name: "echo".to_string() },
            ModelStreamEvent::ToolInputDelta { call_id: "call-1".to_string(), delta: "{\"x\":".to_string() },
            finish("tool_calls"),
        ]
    };
    let model = Arc::new(ScriptedModel::new(vec![malformed_turn(), malformed_turn()]));
    let (tx, mut rx) = mpsc::channel(64);
    let config = LoopConfig { max_turns: Some(1), ..LoopConfig::default() };
    let driver = LoopDriver::builder().model(model).tools(registry()).event_tx(tx).config(config).build();

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = ToolContext::new(dir.path(), "session-1");
    let mut history = MessageHistory::new();

    let outcome = driver.run("go", &mut history, &ctx).await.expect("run");
    assert_eq!(outcome.stop_reason, StopReason::MaxTurnsReached);

    let mut saw_malformed = false;
    let mut saw_summary_error = false;
    while let Ok(event) = rx.try_recv() {
        match event {
            LoopEvent::MalformedToolCall { call_id, raw, .. } => {
                saw_malformed = true;
                assert_eq!(call_id, "call-1");
                assert_eq!(raw, "{\"x\":");
            }
            LoopEvent::Error { .. } => saw_summary_error = true,
            _ => {}
        }
    }
    assert!(saw_malformed);
    assert!(saw_summary_error);
}

#[tokio::test]
async fn an_already_cancelled_token_stops_immediately() {
    let model = Arc::new(ScriptedModel::new(vec![vec![finish("stop")]]));
    let (tx, mut rx) = mpsc::channel(64);
    let cancel = CancellationToken::new();
    cancel.cancel();
    let driver = LoopDriver::builder().model(model).tools(registry()).event_tx(tx).cancel_token(cancel).build();

    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = ToolContext::new(dir.path(), "session-1");
    let mut history = MessageHistory::new();

    let outcome = driver.run("go", &mut history, &ctx).await.expect("run");
    assert_eq!(outcome.stop_reason, StopReason::Interrupted);
    assert_eq!(outcome.turns_completed, 0);

    let mut saw_interrupted = false;
    while let Ok(event) = rx.try_recv() {
        if matches!(event, LoopEvent::Interrupted) {
            saw_interrupted = true;
        }
    }
    assert!(saw_interrupted);
}

#[tokio::test]
async fn reenters_for_incomplete_todos_then_hits_the_auto_continue_limit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctx = ToolContext::new(dir.path(), "session-1");
    ctx.todo_store()
        .write(&[TodoItem {
            id: "1".to_string(),
            content: "keep going".to_string(),
            status: TodoStatus::Pending,
            priority: TodoPriority::Medium,
            description: None,
        }])
        .expect("seed todo store");

    // finish_reason is "stop" every turn: the tool-calling inner loop never
    // re-enters on its own, but an incomplete todo is always present, so
    // the outer continuation loop keeps re-entering until its ceiling.
    let turns: Vec<Vec<ModelStreamEvent>> =
        (0..8).map(|_| vec![ModelStreamEvent::TextDelta { delta: "ok".to_string() }, finish("stop")]).collect();
    let model = Arc::new(ScriptedModel::new(turns));
    let (tx, mut rx) = mpsc::channel(256);
    let driver = LoopDriver::builder().model(model).tools(registry()).event_tx(tx).build();

    let mut history = MessageHistory::new();
    let outcome = driver.run("go", &mut history, &ctx).await.expect("run");

    assert_eq!(outcome.stop_reason, StopReason::AutoContinueLimitReached { loops: 5 });
    // 1 initial turn + 5 continuation turns.
    assert_eq!(outcome.turns_completed, 6);

    let mut saw_limit_event = false;
    while let Ok(event) = rx.try_recv() {
        if let LoopEvent::AutoContinueLimitReached { loops } = event {
            saw_limit_event = true;
            assert_eq!(loops, 5);
        }
    }
    assert!(saw_limit_event);
}
