//! Errors raised by the loop driver itself, as distinct from tool-execution
//! errors (which are folded into history as tool-result content rather than
//! propagated here).

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_error::stack_trace_debug;
use cea_todo::TodoError;
use snafu::Location;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum LoopError {
    #[snafu(display("model stream failed: {message}"))]
    Stream {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(transparent)]
    Todo { source: TodoError },
}

impl LoopError {
    /// Build a [`LoopError::Stream`], for `ModelClient` implementations
    /// outside this crate to report a failed or malformed provider stream.
    pub fn stream_failed(message: impl Into<String>) -> Self {
        loop_error::StreamSnafu { message: message.into() }.build()
    }
}

impl ErrorExt for LoopError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Stream { .. } => StatusCode::External,
            Self::Todo { source } => source.status_code(),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
