//! Errors raised by the hashline codec.

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_error::stack_trace_debug;
use snafu::Location;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum HashlineError {
    #[snafu(display("edit batch must not be empty"))]
    EmptyBatch {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("anchor references line {line}, outside the file's range of 1..={max_line}"))]
    OutOfRange {
        line: u32,
        max_line: u32,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("hashline anchors are stale:\n{context}"))]
    Mismatch {
        context: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("no changes made: every edit in the batch was a no-op"))]
    NoChanges {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("malformed hashline tag: {tag}"))]
    InvalidTag {
        tag: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("file hash mismatch: expected {expected}, found {actual}"))]
    StaleFileHash {
        expected: String,
        actual: String,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for HashlineError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyBatch { .. } => StatusCode::InvalidArguments,
            Self::OutOfRange { .. } => StatusCode::HashlineOutOfRange,
            Self::Mismatch { .. } => StatusCode::HashlineMismatch,
            Self::NoChanges { .. } => StatusCode::NoChanges,
            Self::InvalidTag { .. } => StatusCode::ParseError,
            Self::StaleFileHash { .. } => StatusCode::HashlineMismatch,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
