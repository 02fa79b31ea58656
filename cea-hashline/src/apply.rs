//! Validates a batch of [`HashlineEdit`]s against a file's current content
//! and applies them in a single pass.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::anchor::Anchor;
use crate::edit::HashlineEdit;
use crate::error::HashlineError;
use crate::error::hashline_error;
use crate::hash::file_hash;
use crate::hash::line_hash;

/// Outcome of a successful [`apply_edits`] call.
#[derive(Debug, Clone)]
pub struct ApplyResult {
    pub content: String,
    /// 1-based line at which the earliest surviving change lands, in the
    /// original file's addressing. `None` only if every edit was a no-op,
    /// in which case [`apply_edits`] returns [`HashlineError::NoChanges`]
    /// instead of a result carrying this as `None`.
    pub first_changed_line: u32,
    /// Lines whose replace edit was a no-op (new text identical to old) and
    /// so was skipped rather than applied.
    pub no_ops: Vec<u32>,
    pub warnings: Vec<String>,
}

/// Validate `edits` against `content` and apply them, returning the new file
/// content. `expected_file_hash`, if given, must match `content`'s
/// [`file_hash`] or the whole batch is rejected before any edit is checked.
pub fn apply_edits(
    content: &str,
    edits: Vec<HashlineEdit>,
    expected_file_hash: Option<&str>,
) -> Result<ApplyResult, HashlineError> {
    if edits.is_empty() {
        return hashline_error::EmptyBatchSnafu.fail();
    }

    if let Some(expected) = expected_file_hash {
        let actual = file_hash(content);
        if !expected.eq_ignore_ascii_case(&actual) {
            return hashline_error::StaleFileHashSnafu {
                expected: expected.to_string(),
                actual,
            }
            .fail();
        }
    }

    let edits = dedup_edits(edits);

    let is_empty_sentinel = content.is_empty();
    let has_trailing_newline = !is_empty_sentinel && content.ends_with('\n');
    let mut working: Vec<String> = content.split('\n').map(str::to_string).collect();
    let file_len: usize = if is_empty_sentinel {
        1
    } else if has_trailing_newline {
        working.len() - 1
    } else {
        working.len()
    };

    validate(&working, file_len, &edits)?;

    let mut annotated: Vec<Annotated> = edits
        .into_iter()
        .enumerate()
        .map(|(index, edit)| {
            let (sort_line, precedence) = sort_key(&edit, file_len);
            Annotated {
                edit,
                sort_line,
                precedence,
                index,
            }
        })
        .collect();

    annotated.sort_by(|a, b| {
        b.sort_line
            .cmp(&a.sort_line)
            .then(a.precedence.cmp(&b.precedence))
            .then_with(|| {
                if a.precedence == 0 {
                    a.index.cmp(&b.index)
                } else {
                    b.index.cmp(&a.index)
                }
            })
    });

    let mut first_changed_line: Option<u32> = None;
    let mut no_ops: Vec<u32> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for item in annotated {
        match item.edit {
            HashlineEdit::Replace { pos, end, lines } => {
                let end_line = end.as_ref().map_or(pos.line, |e| e.line);
                let start = (pos.line - 1) as usize;
                let end_idx = (end_line - 1) as usize;
                if working[start..=end_idx] == lines[..] {
                    no_ops.push(pos.line);
                    warnings.push(format!("replace at line {} was a no-op, skipped", pos.line));
                    continue;
                }
                working.splice(start..=end_idx, lines);
                first_changed_line = Some(first_changed_line.map_or(pos.line, |l| l.min(pos.line)));
            }
            HashlineEdit::Append { pos, lines } => {
                if is_empty_sentinel && pos.is_none() {
                    working = lines;
                    first_changed_line = Some(first_changed_line.map_or(1, |l| l.min(1)));
                    continue;
                }
                let insert_at = match &pos {
                    Some(anchor) => anchor.line as usize,
                    None if has_trailing_newline => working.len() - 1,
                    None => working.len(),
                };
                let changed_line = insert_at as u32 + 1;
                working.splice(insert_at..insert_at, lines);
                first_changed_line = Some(first_changed_line.map_or(changed_line, |l| l.min(changed_line)));
            }
            HashlineEdit::Prepend { pos, lines } => {
                if is_empty_sentinel && pos.is_none() {
                    working = lines;
                    first_changed_line = Some(first_changed_line.map_or(1, |l| l.min(1)));
                    continue;
                }
                let insert_at = match &pos {
                    Some(anchor) => (anchor.line - 1) as usize,
                    None => 0,
                };
                let changed_line = insert_at as u32 + 1;
                working.splice(insert_at..insert_at, lines);
                first_changed_line = Some(first_changed_line.map_or(changed_line, |l| l.min(changed_line)));
            }
        }
    }

    let Some(first_changed_line) = first_changed_line else {
        return hashline_error::NoChangesSnafu.fail();
    };

    Ok(ApplyResult {
        content: working.join("\n"),
        first_changed_line,
        no_ops,
        warnings,
    })
}

struct Annotated {
    edit: HashlineEdit,
    sort_line: i64,
    precedence: u8,
    index: usize,
}

fn sort_key(edit: &HashlineEdit, file_len: usize) -> (i64, u8) {
    match edit {
        HashlineEdit::Replace { pos, end, .. } => {
            let line = end.as_ref().map_or(pos.line, |e| e.line);
            (i64::from(line), 0)
        }
        HashlineEdit::Append { pos, .. } => {
            let line = pos.as_ref().map_or(file_len as i64 + 1, |p| i64::from(p.line));
            (line, 1)
        }
        HashlineEdit::Prepend { pos, .. } => {
            let line = pos.as_ref().map_or(0, |p| i64::from(p.line));
            (line, 2)
        }
    }
}

fn dedup_edits(edits: Vec<HashlineEdit>) -> Vec<HashlineEdit> {
    let mut deduped: Vec<HashlineEdit> = Vec::with_capacity(edits.len());
    for edit in edits {
        if !deduped.contains(&edit) {
            deduped.push(edit);
        }
    }
    deduped
}

fn validate(working: &[String], file_len: usize, edits: &[HashlineEdit]) -> Result<(), HashlineError> {
    let mut out_of_range: BTreeSet<u32> = BTreeSet::new();
    let mut mismatches: BTreeMap<u32, String> = BTreeMap::new();

    let mut check = |anchor: &Anchor| {
        let line = anchor.line;
        if line < 1 || line as usize > file_len {
            out_of_range.insert(line);
            return;
        }
        let current = &working[(line - 1) as usize];
        if !line_hash(line, current).eq_ignore_ascii_case(&anchor.hash) {
            mismatches.insert(line, current.clone());
        }
    };

    for edit in edits {
        match edit {
            HashlineEdit::Replace { pos, end, .. } => {
                check(pos);
                if let Some(end) = end {
                    check(end);
                    if pos.line > end.line {
                        out_of_range.insert(end.line);
                    }
                }
            }
            HashlineEdit::Append { pos, .. } | HashlineEdit::Prepend { pos, .. } => {
                if let Some(pos) = pos {
                    check(pos);
                }
            }
        }
    }

    if let Some(&line) = out_of_range.iter().next() {
        return hashline_error::OutOfRangeSnafu {
            line,
            max_line: file_len as u32,
        }
        .fail();
    }

    if !mismatches.is_empty() {
        let context = render_mismatch_context(working, file_len, &mismatches);
        return hashline_error::MismatchSnafu { context }.fail();
    }

    Ok(())
}

fn render_mismatch_context(working: &[String], file_len: usize, mismatches: &BTreeMap<u32, String>) -> String {
    let mut out = String::new();
    for &line in mismatches.keys() {
        let start = line.saturating_sub(2).max(1);
        let end = (line + 2).min(file_len as u32);
        out.push_str(&format!("line {line}:\n"));
        for l in start..=end {
            let marker = if l == line { ">>>" } else { "   " };
            out.push_str(&format!("{marker} {l}: {}\n", working[(l - 1) as usize]));
        }
    }
    out
}

#[cfg(test)]
#[path = "apply.test.rs"]
mod tests;
