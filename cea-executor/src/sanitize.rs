//! Terminal output cleanup: stripping ANSI escape sequences and normalizing
//! line endings before output is shown to a model or a human.

use std::sync::LazyLock;

use regex::Regex;

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\x1b\[[0-9;:<=>?]*[ -/]*[@-~]|\x1b\][\s\S]*?(?:\x07|\x1b\\)").unwrap()
});

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\n{3,}").unwrap()
});

/// Decode `raw` as lossy UTF-8, strip ANSI CSI/OSC sequences, drop `\r`, and
/// collapse runs of three or more newlines down to two.
pub fn sanitize(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let text = ANSI_ESCAPE.replace_all(&text, "");
    let text = text.replace('\r', "");
    NEWLINE_RUNS.replace_all(&text, "\n\n").into_owned()
}

#[cfg(test)]
#[path = "sanitize.test.rs"]
mod tests;
