use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::*;

fn options(tmp: &tempfile::TempDir) -> ExecuteOptions {
    ExecuteOptions::new(std::env::current_dir().expect("cwd"))
        .with_timeout_ms(5_000)
        .with_stdin(StdinMode::Ignored)
        .pipe_tmp_dir(tmp)
}

trait TestOptionsExt {
    fn pipe_tmp_dir(self, tmp: &tempfile::TempDir) -> Self;
}

impl TestOptionsExt for ExecuteOptions {
    fn pipe_tmp_dir(mut self, tmp: &tempfile::TempDir) -> Self {
        self.tmp_dir = tmp.path().to_path_buf();
        self
    }
}

#[tokio::test]
async fn runs_a_simple_command() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let result = execute("echo hello", options(&tmp), CancellationToken::new()).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "hello\n");
    assert!(!result.timed_out);
    assert!(!result.cancelled);
}

#[tokio::test]
async fn reports_nonzero_exit_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let result = execute("exit 7", options(&tmp), CancellationToken::new()).await;
    assert_eq!(result.exit_code, 7);
}

#[tokio::test]
async fn times_out_a_long_running_command() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let opts = options(&tmp).with_timeout_ms(100);
    let result = execute("sleep 30", opts, CancellationToken::new()).await;
    assert!(result.timed_out);
    assert_eq!(result.exit_code, 124);
    assert!(!result.cancelled);
}

#[tokio::test]
async fn cancellation_is_reported_distinctly_from_timeout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_clone.cancel();
    });

    let result = execute("sleep 30", options(&tmp), cancel).await;
    assert!(result.cancelled);
    assert_eq!(result.exit_code, 130);
    assert!(!result.timed_out);
}

#[tokio::test]
async fn a_pre_cancelled_token_short_circuits() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = execute("echo should-not-run", options(&tmp), cancel).await;
    assert!(result.cancelled);
    assert_eq!(result.exit_code, 130);
    assert!(result.output.is_empty());
}

#[tokio::test]
async fn strips_ansi_sequences_from_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let result = execute(
        "printf '\\033[31mhello\\033[0m\\n'",
        options(&tmp),
        CancellationToken::new(),
    )
    .await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "hello\n");
}

#[tokio::test]
async fn feeds_piped_stdin_to_the_child() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let opts = options(&tmp).with_stdin(StdinMode::Piped("from stdin".to_string()));
    let result = execute("cat", opts, CancellationToken::new()).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.output, "from stdin");
}

#[tokio::test]
async fn spawn_failure_is_reported_as_exit_code_one() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // An empty command string still runs via `bash -c ""`, which exits 0;
    // exercise a genuine spawn failure via a nonexistent working directory.
    let mut opts = options(&tmp);
    opts.cwd = std::path::PathBuf::from("/no/such/directory/cea-test");
    let result = execute("echo hi", opts, CancellationToken::new()).await;
    assert_eq!(result.exit_code, 1);
    assert!(!result.output.is_empty());
}
