//! Errors raised by the todo store.

use std::path::PathBuf;

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_error::stack_trace_debug;
use snafu::Location;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum TodoError {
    #[snafu(display("todo[{index}] has empty content"))]
    EmptyContent {
        index: usize,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to read {path:?}"))]
    Read {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to write {path:?}"))]
    Write {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for TodoError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyContent { .. } => StatusCode::InvalidArguments,
            Self::Read { .. } | Self::Write { .. } => StatusCode::IoError,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
