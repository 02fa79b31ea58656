//! The top-level error type for the headless entrypoint: anything that
//! reaches `main` without already being folded into an NDJSON event.

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_error::stack_trace_debug;
use cea_loop::LoopError;
use snafu::Snafu;

/// `HttpModelClient` reports all provider/transport failures as
/// [`LoopError::stream_failed`], since `ModelClient::stream` is bound to
/// return `LoopError`; this type only exists to fold that in with the
/// entrypoint's own flag-parsing failures.
#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum CliError {
    #[snafu(display("CEA_MODEL_API_KEY is not set"))]
    MissingApiKey,

    #[snafu(transparent)]
    Loop { source: LoopError },
}

impl ErrorExt for CliError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiKey => StatusCode::InvalidArguments,
            Self::Loop { source } => source.status_code(),
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
