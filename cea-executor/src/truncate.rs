//! Final line/byte-budget truncation of sanitized process output, spilling
//! the untruncated text to a temp file when truncation happens.

use std::path::Path;
use std::path::PathBuf;

use uuid::Uuid;

const MAX_LINES: usize = 2000;
const MAX_BYTES: usize = 50 * 1024;
const SPILL_RETRIES: u32 = 3;

/// Outcome of [`truncate`].
#[derive(Debug, Clone)]
pub struct TruncatedOutput {
    pub text: String,
    pub truncated: bool,
    pub spilled_path: Option<PathBuf>,
}

/// Truncate `text` to at most [`MAX_LINES`] lines and [`MAX_BYTES`] bytes,
/// keeping the first ~20% of lines, a separator noting how many lines were
/// omitted and where the full output was saved, and the trailing lines.
/// When truncation is needed the untruncated text is first spilled to a
/// `cea-output-<uuid>.txt` file under `tmp_dir`.
pub fn truncate(text: &str, tmp_dir: &Path) -> TruncatedOutput {
    let line_count = text.lines().count();
    if line_count <= MAX_LINES && text.len() <= MAX_BYTES {
        return TruncatedOutput {
            text: text.to_string(),
            truncated: false,
            spilled_path: None,
        };
    }

    let spilled_path = spill(text, tmp_dir);
    let lines: Vec<&str> = text.lines().collect();

    let mut joined = if lines.len() > MAX_LINES {
        let budget = MAX_LINES.saturating_sub(1);
        let head_count = (lines.len() / 5).min(budget);
        let tail_count = budget.saturating_sub(head_count).min(lines.len() - head_count);
        let omitted = lines.len() - head_count - tail_count;

        let spilled_display = spilled_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unavailable>".to_string());
        let separator = format!(
            "[...] {omitted} lines omitted. Full output saved to {spilled_display}. Use read_file to view specific sections."
        );

        let mut kept: Vec<&str> = Vec::with_capacity(head_count + 1 + tail_count);
        kept.extend_from_slice(&lines[..head_count]);
        kept.push(separator.as_str());
        kept.extend_from_slice(&lines[lines.len() - tail_count..]);
        kept.join("\n")
    } else {
        text.to_string()
    };

    if joined.len() > MAX_BYTES {
        let mut cut = MAX_BYTES;
        while !joined.is_char_boundary(cut) {
            cut -= 1;
        }
        joined.truncate(cut);
    }

    TruncatedOutput {
        text: joined,
        truncated: true,
        spilled_path,
    }
}

/// Write `text` to a uniquely named file under `tmp_dir`, retrying on a
/// name collision up to [`SPILL_RETRIES`] times.
fn spill(text: &str, tmp_dir: &Path) -> Option<PathBuf> {
    use std::fs::OpenOptions;
    use std::io::Write;

    for _ in 0..SPILL_RETRIES {
        let path = tmp_dir.join(format!("cea-output-{}.txt", Uuid::new_v4()));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                return file.write_all(text.as_bytes()).ok().map(|()| path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(_) => return None,
        }
    }
    None
}

#[cfg(test)]
#[path = "truncate.test.rs"]
mod tests;
