//! Command-line flags for the headless entrypoint.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cea")]
#[command(about = "Drive a model through a tool-use loop over a local working tree")]
pub struct Args {
    /// The user prompt to send as the first turn.
    #[arg(short = 'p', long = "prompt")]
    pub prompt: String,

    /// Model name to request from the provider.
    #[arg(short = 'm', long = "model", default_value = "gpt-4o")]
    pub model: String,

    /// Request the provider's reasoning/thinking content, when supported.
    #[arg(long = "think", default_value_t = false)]
    pub think: bool,

    /// Fall back to a non-streaming request if the provider rejects streaming.
    #[arg(long = "tool-fallback", default_value_t = false)]
    pub tool_fallback: bool,

    /// Working directory the tools operate against. Defaults to the current directory.
    #[arg(long = "cwd")]
    pub cwd: Option<PathBuf>,

    /// Maximum number of model turns before stopping.
    #[arg(long = "max-turns")]
    pub max_turns: Option<i32>,
}
