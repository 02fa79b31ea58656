//! The file-safety reader: a gated, windowed, hashline-numbered view onto a
//! single file, shared by the `read_file` tool and by `grep`'s result
//! rendering.

use std::path::Path;
use std::path::PathBuf;

use cea_hashline::file_hash;
use cea_hashline::format_tag;
use cea_hashline::line_hash;
use cea_ignore::IgnoreService;
use chrono::DateTime;
use chrono::Utc;
use snafu::ResultExt;
use tokio::io::AsyncReadExt;

use crate::error::ToolError;
use crate::error::tool_error;

/// Hard cap on the bytes a single `read_window` call will read in full.
pub const SIZE_CAP_BYTES: u64 = 1024 * 1024;

const DEFAULT_BEFORE: u32 = 5;
const DEFAULT_AFTER: u32 = 10;
const DEFAULT_LIMIT: i64 = 2000;

const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff",
    // audio/video
    "mp3", "wav", "flac", "ogg", "mp4", "mov", "avi", "mkv", "webm",
    // archives
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar",
    // executables
    "exe", "dll", "so", "dylib", "a", "o", "bin",
    // fonts
    "ttf", "otf", "woff", "woff2",
    // databases
    "db", "sqlite", "sqlite3",
    // dependency lockfiles: noisy, regenerable, not meant for line edits
    "lock",
];

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// A NUL byte occurring before the chunk ends at a valid UTF-8 boundary
/// indicates binary content; text files never embed NUL.
fn looks_binary(chunk: &[u8]) -> bool {
    let nul_pos = match chunk.iter().position(|&b| b == 0) {
        Some(pos) => pos,
        None => return false,
    };
    std::str::from_utf8(&chunk[..nul_pos]).is_err() || nul_pos < chunk.len()
}

/// Where to window a file read around.
#[derive(Debug, Clone, Default)]
pub struct ReadWindowOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub around_line: Option<u32>,
    pub before: Option<u32>,
    pub after: Option<u32>,
    pub bypass_ignore: bool,
}

/// The structured result of a windowed, gated file read.
#[derive(Debug, Clone)]
pub struct ReadWindowResult {
    pub path: PathBuf,
    pub bytes: u64,
    pub last_modified: DateTime<Utc>,
    pub total_lines: u32,
    pub start_line: u32,
    pub end_line: u32,
    pub truncated: bool,
    pub file_hash: String,
    pub numbered_content: String,
}

impl ReadWindowResult {
    /// The bracketed block a tool hands back to the model: a header/footer
    /// wrapping the numbered lines.
    pub fn render_block(&self) -> String {
        let basename = self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        format!(
            "======== {basename} L{}-L{} ========\n{}\n======== end ========",
            self.start_line, self.end_line, self.numbered_content
        )
    }
}

pub async fn read_window(path: &Path, root: &Path, ignore: &IgnoreService, options: &ReadWindowOptions) -> Result<ReadWindowResult, ToolError> {
    if !options.bypass_ignore && ignore.is_ignored(root, path) {
        return tool_error::IgnoredSnafu { path: path.to_path_buf() }.fail();
    }

    if has_binary_extension(path) {
        return tool_error::BinarySnafu { path: path.to_path_buf() }.fail();
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|source| classify_open_error(path, source))?;

    let mut chunk = vec![0u8; 8192];
    let n = file.read(&mut chunk).await.context(tool_error::IoSnafu { path: path.to_path_buf() })?;
    chunk.truncate(n);
    if looks_binary(&chunk) {
        return tool_error::BinarySnafu { path: path.to_path_buf() }.fail();
    }

    let metadata = file.metadata().await.context(tool_error::IoSnafu { path: path.to_path_buf() })?;
    if metadata.len() > SIZE_CAP_BYTES {
        return tool_error::TooLargeSnafu {
            path: path.to_path_buf(),
            limit_bytes: SIZE_CAP_BYTES,
        }
        .fail();
    }
    let last_modified: DateTime<Utc> = metadata.modified().context(tool_error::IoSnafu { path: path.to_path_buf() })?.into();

    let content = tokio::fs::read_to_string(path).await.context(tool_error::IoSnafu { path: path.to_path_buf() })?;
    let lines: Vec<&str> = content.split('\n').collect();
    let total_lines = u32::try_from(lines.len()).unwrap_or(u32::MAX);

    let (start_line, end_line) = window_bounds(total_lines, options)?;
    let truncated = end_line < total_lines || start_line > 1;

    let mut numbered_content = String::new();
    for (index, text) in lines.iter().enumerate() {
        let line_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        if line_number < start_line || line_number > end_line {
            continue;
        }
        let tag = format_tag(line_number, &line_hash(line_number, text));
        numbered_content.push_str(&format!("  {tag} | {text}\n"));
    }
    numbered_content.truncate(numbered_content.trim_end_matches('\n').len());

    Ok(ReadWindowResult {
        path: path.to_path_buf(),
        bytes: metadata.len(),
        last_modified,
        total_lines,
        start_line,
        end_line,
        truncated,
        file_hash: file_hash(&content),
        numbered_content,
    })
}

fn window_bounds(total_lines: u32, options: &ReadWindowOptions) -> Result<(u32, u32), ToolError> {
    if let Some(around) = options.around_line {
        let before = options.before.unwrap_or(DEFAULT_BEFORE);
        let after = options.after.unwrap_or(DEFAULT_AFTER);
        let start = around.saturating_sub(before).max(1);
        let end = around.saturating_add(after).min(total_lines.max(1));
        return Ok((start, end));
    }

    let offset = options.offset.unwrap_or(0);
    if offset < 0 {
        return tool_error::InvalidInputSnafu {
            message: "offset must be >= 0",
        }
        .fail();
    }
    let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
    if limit <= 0 {
        return tool_error::InvalidInputSnafu {
            message: "limit must be > 0",
        }
        .fail();
    }

    let offset = u32::try_from(offset).unwrap_or(u32::MAX);
    let limit = u32::try_from(limit).unwrap_or(u32::MAX);
    let start = offset.saturating_add(1).max(1);
    let end = offset.saturating_add(limit).min(total_lines.max(1));
    Ok((start, end))
}

fn classify_open_error(path: &Path, source: std::io::Error) -> ToolError {
    if source.kind() == std::io::ErrorKind::NotFound {
        tool_error::NotFoundPathSnafu { path: path.to_path_buf() }.build()
    } else {
        tool_error::IoSnafu { path: path.to_path_buf(), source }.build()
    }
}

#[cfg(test)]
#[path = "reader.test.rs"]
mod tests;
