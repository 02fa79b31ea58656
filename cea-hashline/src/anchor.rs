//! Hashline anchors: `{ line, hash }` pairs that tag a specific line's
//! content, and the `LINE#ID` tag format they're parsed from.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// A content-addressed reference to a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub line: u32,
    /// Always stored uppercase, e.g. `"MQ"`.
    pub hash: String,
}

impl Anchor {
    pub fn new(line: u32, hash: impl Into<String>) -> Self {
        Self {
            line,
            hash: hash.into().to_ascii_uppercase(),
        }
    }
}

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(\d+)#([A-Za-z]{2})\b").unwrap()
});

/// Parse a `LINE#ID` tag out of arbitrary surrounding text.
///
/// Accepts an optional leading diff-style marker (`>>>`, `>>`, `+`, `-`) and
/// whitespace before the tag, and also matches a tag embedded after a `:`
/// or `-` separator, so grep output like `./file.ts:7#MQ | ...` parses.
/// The hash is uppercased. Returns `None` if no tag is found or the line
/// number is less than 1.
pub fn parse_tag(input: &str) -> Option<Anchor> {
    let captures = TAG_PATTERN.captures(input)?;
    let line: u32 = captures.get(1)?.as_str().parse().ok()?;
    if line < 1 {
        return None;
    }
    let hash = captures.get(2)?.as_str().to_ascii_uppercase();
    Some(Anchor { line, hash })
}

/// Render a tag in the canonical `LINE#ID` form, e.g. for numbered output.
pub fn format_tag(line: u32, hash: &str) -> String {
    format!("{line}#{hash}")
}

#[cfg(test)]
#[path = "anchor.test.rs"]
mod tests;
