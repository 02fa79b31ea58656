//! Content-addressed line anchoring for stale-read-safe file edits.
//!
//! A hashline anchor pairs a line number with a short hash of that line's
//! normalized content (a [`Anchor`]). Edit batches ([`HashlineEdit`]) refer
//! to lines by anchor rather than by number alone, so [`apply_edits`] can
//! detect when a file changed between when a caller read it and when it
//! tries to edit it, instead of silently editing the wrong line.

mod anchor;
mod apply;
mod edit;
mod error;
mod hash;
mod strip;

pub use anchor::Anchor;
pub use anchor::format_tag;
pub use anchor::parse_tag;
pub use apply::ApplyResult;
pub use apply::apply_edits;
pub use edit::HashlineEdit;
pub use error::HashlineError;
pub use hash::ALPHABET;
pub use hash::file_hash;
pub use hash::line_hash;
pub use hash::token_to_byte;
pub use strip::strip_copied_prefixes;
