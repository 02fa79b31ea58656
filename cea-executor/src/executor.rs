//! Process-group subprocess execution: spawn through a platform shell, merge
//! stdout/stderr into a ring-trimmed buffer, sanitize and truncate the
//! result, and resolve a single exit code from whatever combination of
//! normal completion, timeout, and cancellation occurred.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use std::time::Instant;

use tokio::io::AsyncReadExt;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::buffer::RingBuffer;
use crate::sanitize::sanitize;
use crate::signal::process_group_alive;
use crate::signal::terminate_process_group;
use crate::truncate::truncate;

/// Default timeout applied when [`ExecuteOptions::timeout_ms`] is not set.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

const READ_CHUNK_SIZE: usize = 8192;

/// Whether the child's stdin is closed or fed a fixed string before being
/// closed.
#[derive(Debug, Clone)]
pub enum StdinMode {
    Ignored,
    Piped(String),
}

/// Options controlling one [`execute`] call.
pub struct ExecuteOptions {
    pub cwd: PathBuf,
    pub timeout_ms: u64,
    pub stdin: StdinMode,
    /// Directory spilled output files are written under. Defaults to the
    /// system temp directory; overridable for tests.
    pub tmp_dir: PathBuf,
    /// Invoked synchronously with each output chunk as it arrives, for
    /// callers that want to stream output live.
    pub on_chunk: Option<Arc<dyn Fn(&[u8]) + Send + Sync>>,
}

impl ExecuteOptions {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            stdin: StdinMode::Ignored,
            tmp_dir: std::env::temp_dir(),
            on_chunk: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_stdin(mut self, stdin: StdinMode) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn with_on_chunk(mut self, callback: Arc<dyn Fn(&[u8]) + Send + Sync>) -> Self {
        self.on_chunk = Some(callback);
        self
    }
}

/// Outcome of a completed (or aborted) [`execute`] call.
#[derive(Debug, Clone)]
pub struct ExecuteResult {
    pub exit_code: i32,
    pub output: String,
    pub timed_out: bool,
    pub cancelled: bool,
    pub truncated: bool,
    pub dropped_bytes: u64,
    pub spilled_path: Option<PathBuf>,
    pub duration_ms: u64,
}

/// Run `command` through a platform shell (`bash -c` on POSIX, `cmd /c` on
/// Windows), in its own process group, until it exits, is cancelled via
/// `cancel`, or exceeds `options.timeout_ms`.
///
/// Always returns a populated [`ExecuteResult`]; spawn failures, timeouts,
/// and cancellation are reported as data rather than as an `Err`.
pub async fn execute(command: &str, options: ExecuteOptions, cancel: CancellationToken) -> ExecuteResult {
    let start = Instant::now();

    if cancel.is_cancelled() {
        return ExecuteResult {
            exit_code: 130,
            output: String::new(),
            timed_out: false,
            cancelled: true,
            truncated: false,
            dropped_bytes: 0,
            spilled_path: None,
            duration_ms: 0,
        };
    }

    let mut cmd = build_command(command, &options);
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            return ExecuteResult {
                exit_code: 1,
                output: format!("failed to spawn command: {e}"),
                timed_out: false,
                cancelled: false,
                truncated: false,
                dropped_bytes: 0,
                spilled_path: None,
                duration_ms: start.elapsed().as_millis() as u64,
            };
        }
    };

    if let StdinMode::Piped(ref input) = options.stdin
        && let Some(mut stdin) = child.stdin.take()
    {
        use tokio::io::AsyncWriteExt;
        let _ = stdin.write_all(input.as_bytes()).await;
        drop(stdin);
    }

    let pgid = child.id().map(|id| id as i32);
    let buffer = Arc::new(Mutex::new(RingBuffer::new()));

    let stdout_task = child
        .stdout
        .take()
        .map(|pipe| spawn_reader(pipe, Arc::clone(&buffer), options.on_chunk.clone()));
    let stderr_task = child
        .stderr
        .take()
        .map(|pipe| spawn_reader(pipe, Arc::clone(&buffer), options.on_chunk.clone()));

    let timeout_dur = Duration::from_millis(options.timeout_ms);

    let (exit_status, timed_out, cancelled) = tokio::select! {
        biased;

        _ = cancel.cancelled() => {
            if let Some(pgid) = pgid {
                terminate_process_group(pgid).await;
            }
            (child.wait().await.ok(), false, true)
        }

        status = child.wait() => (status.ok(), false, false),

        () = tokio::time::sleep(timeout_dur) => {
            if let Some(pgid) = pgid {
                terminate_process_group(pgid).await;
            }
            (child.wait().await.ok(), true, false)
        }
    };

    if let Some(task) = stdout_task {
        let _ = task.await;
    }
    if let Some(task) = stderr_task {
        let _ = task.await;
    }

    if let Some(pgid) = pgid
        && process_group_alive(pgid)
    {
        terminate_process_group(pgid).await;
    }

    let dropped_bytes = buffer.lock().await.dropped_bytes();
    let raw = { buffer.lock().await.as_bytes().to_vec() };
    let sanitized = sanitize(&raw);
    let truncated_output = truncate(&sanitized, &options.tmp_dir);

    let exit_code = resolve_exit_code(exit_status.and_then(|s| s.code()), timed_out, cancelled);

    ExecuteResult {
        exit_code,
        output: truncated_output.text,
        timed_out,
        cancelled,
        truncated: truncated_output.truncated,
        dropped_bytes,
        spilled_path: truncated_output.spilled_path,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

fn resolve_exit_code(raw: Option<i32>, timed_out: bool, cancelled: bool) -> i32 {
    if let Some(code) = raw {
        return code;
    }
    if timed_out {
        return 124;
    }
    if cancelled {
        return 130;
    }
    1
}

fn spawn_reader<R>(
    mut pipe: R,
    buffer: Arc<Mutex<RingBuffer>>,
    on_chunk: Option<Arc<dyn Fn(&[u8]) + Send + Sync>>,
) -> tokio::task::JoinHandle<()>
where
    R: tokio::io::AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        loop {
            match pipe.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if let Some(ref callback) = on_chunk {
                        callback(&chunk[..n]);
                    }
                    buffer.lock().await.push(&chunk[..n]);
                }
            }
        }
    })
}

fn build_command(command: &str, options: &ExecuteOptions) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(shell_program());
    cmd.arg(shell_flag())
        .arg(command)
        .current_dir(&options.cwd)
        .env("TERM", "dumb")
        .kill_on_drop(true)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    match options.stdin {
        StdinMode::Ignored => {
            cmd.stdin(Stdio::null());
        }
        StdinMode::Piped(_) => {
            cmd.stdin(Stdio::piped());
        }
    }

    #[cfg(unix)]
    cmd.process_group(0);

    cmd
}

#[cfg(unix)]
fn shell_program() -> &'static str {
    "bash"
}

#[cfg(unix)]
fn shell_flag() -> &'static str {
    "-c"
}

#[cfg(windows)]
fn shell_program() -> &'static str {
    "cmd"
}

#[cfg(windows)]
fn shell_flag() -> &'static str {
    "/c"
}

#[cfg(test)]
#[path = "executor.test.rs"]
mod tests;
