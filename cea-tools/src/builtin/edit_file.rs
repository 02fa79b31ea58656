//! `edit_file`: a string-replace variant for quick literal edits, and a
//! hashline variant for content-addressed batch edits.

use async_trait::async_trait;
use cea_hashline::HashlineEdit;
use cea_hashline::file_hash;
use cea_protocol::ToolOutput;
use serde_json::Value;
use serde_json::json;

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::error::tool_error;
use crate::tool::Tool;

pub struct EditFileTool;

#[async_trait]
impl Tool for EditFileTool {
    fn name(&self) -> &str {
        "edit_file"
    }

    fn description(&self) -> &str {
        "Edit a file either by literal string replacement or by a batch of content-addressed hashline edits."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": { "type": "string" },
                "old_str": { "type": "string" },
                "new_str": { "type": "string" },
                "replace_all": { "type": "boolean" },
                "expected_file_hash": { "type": "string" },
                "edits": { "type": "array" },
            },
            "required": ["path"],
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext) -> Result<ToolOutput, ToolError> {
        let path = input["path"]
            .as_str()
            .ok_or_else(|| tool_error::InvalidInputSnafu { message: "path must be a string" }.build())?;
        let resolved = ctx.resolve_path(path);

        if input.get("edits").is_some() {
            hashline_edit(&resolved, input).await
        } else {
            string_replace_edit(&resolved, input).await
        }
    }
}

async fn hashline_edit(path: &std::path::Path, input: Value) -> Result<ToolOutput, ToolError> {
    let edits: Vec<HashlineEdit> = serde_json::from_value(input["edits"].clone()).map_err(|source| {
        tool_error::InvalidInputSnafu {
            message: format!("invalid edits: {source}"),
        }
        .build()
    })?;
    let expected_file_hash = input.get("expected_file_hash").and_then(Value::as_str).map(str::to_string);

    let content = tokio::fs::read_to_string(path).await.map_err(|source| classify_read_error(path, source))?;

    let result = cea_hashline::apply_edits(&content, edits, expected_file_hash.as_deref())?;

    tokio::fs::write(path, &result.content)
        .await
        .context_io(path)?;

    let mut summary =
        format!("OK - hashline edit. Applied edits to {}; first change at line {}.", path.display(), result.first_changed_line);
    if !result.no_ops.is_empty() {
        summary.push_str(&format!(" No-op lines: {:?}.", result.no_ops));
    }
    for warning in &result.warnings {
        summary.push_str(&format!("\n{warning}"));
    }
    summary.push_str(&format!("\nnew_file_hash: {}", file_hash(&result.content)));

    Ok(ToolOutput::text(summary))
}

async fn string_replace_edit(path: &std::path::Path, input: Value) -> Result<ToolOutput, ToolError> {
    let old_str = input.get("old_str").and_then(Value::as_str).unwrap_or_default();
    let new_str = input.get("new_str").and_then(Value::as_str).unwrap_or_default();
    let replace_all = input.get("replace_all").and_then(Value::as_bool).unwrap_or(false);

    if old_str.is_empty() && !path.exists() {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.context_io(path)?;
        }
        tokio::fs::write(path, new_str).await.context_io(path)?;
        return Ok(ToolOutput::text(format!("Created {}", path.display())));
    }

    let content = tokio::fs::read_to_string(path).await.map_err(|source| classify_read_error(path, source))?;

    let occurrences = content.matches(old_str).count();
    if occurrences == 0 {
        return Ok(ToolOutput::error(no_match_diagnostic(&content, old_str)));
    }

    let updated = if replace_all {
        content.replace(old_str, new_str)
    } else {
        content.replacen(old_str, new_str, 1)
    };

    tokio::fs::write(path, &updated).await.context_io(path)?;

    let replaced = if replace_all { occurrences } else { 1 };
    Ok(ToolOutput::text(format!("Replaced {replaced} occurrence(s) in {}", path.display())))
}

fn no_match_diagnostic(content: &str, old_str: &str) -> String {
    let mut message = String::from("old_str not found in file.");

    if let Some((line_number, context, distance)) = find_closest_match(content, old_str) {
        message.push_str(&format!("\nClosest match at line {line_number} (edit distance {distance}):\n{context}"));
    }

    if !old_str.is_ascii() {
        message.push_str("\nNote: old_str contains non-ASCII characters.");
    }
    if old_str.contains('\r') {
        message.push_str("\nNote: old_str contains CRLF line endings.");
    }
    if old_str.contains('\u{fffd}') {
        message.push_str("\nNote: old_str contains the Unicode replacement character (U+FFFD), likely from a lossy encoding conversion.");
    }

    message
}

/// Find the line in `content` with the smallest Levenshtein distance to
/// `needle`'s first line, returning its line number (1-based), a ±2-line
/// context window, and the distance.
fn find_closest_match(content: &str, needle: &str) -> Option<(usize, String, usize)> {
    let needle_first_line = needle.lines().next().unwrap_or(needle);
    if needle_first_line.is_empty() {
        return None;
    }

    let lines: Vec<&str> = content.lines().collect();
    let (best_index, best_distance) = lines
        .iter()
        .enumerate()
        .map(|(index, line)| (index, levenshtein(needle_first_line, line)))
        .min_by_key(|(_, distance)| *distance)?;

    let start = best_index.saturating_sub(2);
    let end = (best_index + 2).min(lines.len().saturating_sub(1));
    let context = lines[start..=end]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let line_number = start + offset + 1;
            let marker = if start + offset == best_index { ">>>" } else { "   " };
            format!("{marker} {line_number}: {line}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some((best_index + 1, context, best_distance))
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut prev_diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let temp = row[j + 1];
            row[j + 1] = if ca == cb {
                prev_diagonal
            } else {
                1 + prev_diagonal.min(row[j]).min(row[j + 1])
            };
            prev_diagonal = temp;
        }
    }

    row[b.len()]
}

fn classify_read_error(path: &std::path::Path, source: std::io::Error) -> ToolError {
    if source.kind() == std::io::ErrorKind::NotFound {
        tool_error::NotFoundPathSnafu { path: path.to_path_buf() }.build()
    } else {
        tool_error::IoSnafu { path: path.to_path_buf(), source }.build()
    }
}

trait IoResultExt<T> {
    fn context_io(self, path: &std::path::Path) -> Result<T, ToolError>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn context_io(self, path: &std::path::Path) -> Result<T, ToolError> {
        self.map_err(|source| {
            tool_error::IoSnafu {
                path: path.to_path_buf(),
                source,
            }
            .build()
        })
    }
}

#[cfg(test)]
#[path = "edit_file.test.rs"]
mod tests;
