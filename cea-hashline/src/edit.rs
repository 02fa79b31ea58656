//! The three hashline edit kinds a batch can contain.

use serde::Deserialize;
use serde::Serialize;

use crate::anchor::Anchor;

/// One edit operation in a hashline batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HashlineEdit {
    /// Replace the inclusive line range `[pos, end ?? pos]` with `lines`.
    Replace {
        pos: Anchor,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<Anchor>,
        lines: Vec<String>,
    },
    /// Insert `lines` before `pos`, or at the start of the file if `pos` is
    /// absent.
    Prepend {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos: Option<Anchor>,
        lines: Vec<String>,
    },
    /// Insert `lines` after `pos`, or at the end of the file if `pos` is
    /// absent.
    Append {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pos: Option<Anchor>,
        lines: Vec<String>,
    },
}
