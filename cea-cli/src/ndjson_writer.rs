//! Translates [`cea_protocol::LoopEvent`]s into the headless NDJSON
//! trajectory schema and writes them to stdout, one compact JSON object per
//! line.

use cea_protocol::LoopEvent;
use cea_protocol::NdjsonEvent;
use cea_protocol::ndjson::NdjsonEventType;
use chrono::Utc;

pub struct NdjsonWriter {
    session_id: String,
}

impl NdjsonWriter {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into() }
    }

    /// Emit the initial `user` line for the prompt that seeded the run.
    pub fn write_user_prompt(&self, prompt: &str) {
        let mut event = NdjsonEvent::new(Utc::now(), NdjsonEventType::User, self.session_id.clone());
        event.content = Some(prompt.to_string());
        self.write(&event);
    }

    /// Translate one loop event into zero or more NDJSON lines and write them.
    pub fn write_loop_event(&self, event: &LoopEvent) {
        for line in self.translate(event) {
            self.write(&line);
        }
    }

    /// The translation `write_loop_event` drives, exposed separately so it
    /// can be exercised without capturing process stdout.
    pub fn translate(&self, event: &LoopEvent) -> Vec<NdjsonEvent> {
        let now = Utc::now();
        let sid = self.session_id.clone();
        match event {
            LoopEvent::TextDelta { delta, .. } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Assistant, sid);
                e.content = Some(delta.clone());
                vec![e]
            }
            LoopEvent::ReasoningDelta { delta, .. } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Assistant, sid);
                e.reasoning_content = Some(delta.clone());
                vec![e]
            }
            LoopEvent::ToolCallStarted { call_id, name, input } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::ToolCall, sid);
                e.tool_call_id = Some(call_id.clone());
                e.tool_name = Some(name.clone());
                e.tool_input = Some(input.clone());
                vec![e]
            }
            LoopEvent::ToolCallCompleted { call_id, output, is_error } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::ToolResult, sid);
                e.tool_call_id = Some(call_id.clone());
                if *is_error {
                    e.error = Some(output.clone());
                } else {
                    e.output = Some(output.clone());
                }
                vec![e]
            }
            LoopEvent::MalformedToolCall { call_id, name, raw } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Error, sid);
                e.tool_call_id = Some(call_id.clone());
                e.tool_name = Some(name.clone());
                e.error = Some(format!("malformed tool call arguments: {raw}"));
                vec![e]
            }
            LoopEvent::Error { message, .. } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Error, sid);
                e.error = Some(message.clone());
                vec![e]
            }
            LoopEvent::Interrupted => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Error, sid);
                e.error = Some("interrupted".to_string());
                vec![e]
            }
            LoopEvent::MaxTurnsReached => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Error, sid);
                e.error = Some("max turns reached".to_string());
                vec![e]
            }
            LoopEvent::AutoContinueLimitReached { loops } => {
                let mut e = NdjsonEvent::new(now, NdjsonEventType::Error, sid);
                e.error = Some(format!("auto-continue limit reached after {loops} loop(s)"));
                vec![e]
            }
            LoopEvent::TurnStarted { .. } | LoopEvent::TurnCompleted { .. } => Vec::new(),
        }
    }

    fn write(&self, event: &NdjsonEvent) {
        match event.to_line() {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::warn!(%err, "failed to serialize NDJSON event"),
        }
    }
}

#[cfg(test)]
#[path = "ndjson_writer.test.rs"]
mod tests;
