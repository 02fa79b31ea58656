//! Errors raised by the file-safety reader and the tool registry.

use std::path::PathBuf;

use cea_error::ErrorExt;
use cea_error::StatusCode;
use cea_error::stack_trace_debug;
use cea_hashline::HashlineError;
use cea_todo::TodoError;
use snafu::Location;
use snafu::Snafu;

#[stack_trace_debug]
#[derive(Snafu)]
#[snafu(visibility(pub(crate)), module)]
pub enum ToolError {
    #[snafu(display("tool not found: {name}"))]
    NotFound {
        name: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid input: {message}"))]
    InvalidInput {
        message: String,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("schema validation failed: {}", errors.join("; ")))]
    SchemaInvalid {
        errors: Vec<String>,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{path:?} is excluded by ignore rules"))]
    Ignored {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{path:?} is a binary file"))]
    Binary {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{path:?} exceeds the {limit_bytes}-byte size cap"))]
    TooLarge {
        path: PathBuf,
        limit_bytes: u64,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{path:?} not found"))]
    NotFoundPath {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("{path:?} is a directory; pass recursive: true to delete it"))]
    RefusedDirectory {
        path: PathBuf,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(transparent)]
    Hashline { source: HashlineError },

    #[snafu(transparent)]
    Todo { source: TodoError },

    #[snafu(display("I/O error on {path:?}"))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("cancelled"))]
    Cancelled {
        #[snafu(implicit)]
        location: Location,
    },
}

impl ErrorExt for ToolError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::InvalidInput { .. } => StatusCode::InvalidArguments,
            Self::SchemaInvalid { .. } => StatusCode::SchemaInvalid,
            Self::Ignored { .. } => StatusCode::IgnoredPath,
            Self::Binary { .. } => StatusCode::BinaryFile,
            Self::TooLarge { .. } => StatusCode::FileTooLarge,
            Self::NotFoundPath { .. } => StatusCode::FileNotFound,
            Self::RefusedDirectory { .. } => StatusCode::InvalidArguments,
            Self::Hashline { source } => source.status_code(),
            Self::Todo { source } => source.status_code(),
            Self::Io { .. } => StatusCode::IoError,
            Self::Cancelled { .. } => StatusCode::Cancelled,
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
