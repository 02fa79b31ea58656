//! Headless entrypoint: parses flags, drives one session of the tool loop
//! against a model provider, and streams NDJSON trajectory events to stdout.

mod args;
mod error;
mod http_model;
mod ndjson_writer;
mod session;

use std::sync::Arc;
use std::time::Instant;

use cea_loop::LoopDriver;
use cea_message::MessageHistory;
use cea_protocol::LoopConfig;
use cea_tools::ToolContext;
use clap::Parser;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::error::CliError;
use crate::error::cli_error;
use crate::http_model::API_KEY_ENV;
use crate::http_model::HttpModelClient;
use crate::ndjson_writer::NdjsonWriter;
use crate::session::new_session_id;

const SYSTEM_PROMPT: &str = "You are an autonomous coding agent operating over a local working tree. \
Use the available tools to read, search, and edit files, run shell commands, and track your progress \
with the todo list. Keep working until the task is complete.";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let start = Instant::now();

    match run(args).await {
        Ok(()) => {
            eprintln!("[headless] Completed in {:.1}s", start.elapsed().as_secs_f64());
            std::process::exit(0);
        }
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            eprintln!("[headless] Completed in {:.1}s", start.elapsed().as_secs_f64());
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let session_id = new_session_id();
    let cwd = args.cwd.unwrap_or_else(|| std::path::PathBuf::from("."));
    let writer = NdjsonWriter::new(session_id.clone());
    writer.write_user_prompt(&args.prompt);

    let api_key = std::env::var(API_KEY_ENV).map_err(|_| cli_error::MissingApiKeySnafu.build())?;
    let model = Arc::new(HttpModelClient::new(args.model.clone(), api_key, args.think, args.tool_fallback));

    let cancel = CancellationToken::new();
    tokio::spawn(watch_for_ctrl_c(cancel.clone()));

    let ctx = ToolContext::new(cwd, session_id.clone()).with_cancel(cancel.clone());
    let tools = Arc::new(cea_tools::default_registry());

    let (tx, mut rx) = mpsc::channel(1024);
    let config = LoopConfig { max_turns: args.max_turns, ..LoopConfig::default() };
    let driver = LoopDriver::builder()
        .model(model)
        .tools(tools)
        .system_prompt(SYSTEM_PROMPT)
        .config(config)
        .event_tx(tx)
        .cancel_token(cancel.clone())
        .build();

    let forward_events = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            writer.write_loop_event(&event);
        }
    });

    let mut history = MessageHistory::new();
    let outcome = driver.run(&args.prompt, &mut history, &ctx).await?;
    let _ = forward_events.await;

    tracing::debug!(?outcome.stop_reason, outcome.turns_completed, "run finished");
    Ok(())
}

async fn watch_for_ctrl_c(cancel: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        cancel.cancel();
    }
}
