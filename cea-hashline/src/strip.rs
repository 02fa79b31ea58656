//! Heuristic stripping of copied line-number prefixes from replacement text
//! a caller pastes back in from a previous numbered read.

use std::sync::LazyLock;

use regex::Regex;

static HASHLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\s*\d+#[A-Za-z]{2}[:|]\s").unwrap()
});

/// Split `text` on `\n` and, if at least half of its non-empty lines carry a
/// hashline prefix (`  12#MQ | `) or a unified-diff `+` marker, strip that
/// prefix from every line that has one. A trailing empty line produced by a
/// terminal `\n` is dropped.
pub fn strip_copied_prefixes(text: &str) -> Vec<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let non_empty = lines.iter().filter(|l| !l.is_empty()).count();
    if non_empty == 0 {
        return lines.into_iter().map(str::to_string).collect();
    }

    let hashline_count = lines.iter().filter(|l| HASHLINE_PREFIX.is_match(l)).count();
    let diff_count = lines
        .iter()
        .filter(|l| !l.is_empty() && l.starts_with('+') && !l.starts_with("++"))
        .count();

    let threshold = non_empty.div_ceil(2);
    if hashline_count >= threshold {
        lines
            .into_iter()
            .map(|l| HASHLINE_PREFIX.replace(l, "").into_owned())
            .collect()
    } else if diff_count >= threshold {
        lines
            .into_iter()
            .map(|l| l.strip_prefix('+').unwrap_or(l).to_string())
            .collect()
    } else {
        lines.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
#[path = "strip.test.rs"]
mod tests;
