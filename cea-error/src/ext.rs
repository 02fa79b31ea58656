//! `ErrorExt`: the trait every domain error enum in this workspace implements
//! so callers can classify and format errors uniformly regardless of which
//! crate raised them.

use std::fmt;

use crate::StatusCode;

/// Extension trait implemented by every error type in this workspace.
pub trait ErrorExt: std::error::Error {
    /// The status code this error should be classified under.
    fn status_code(&self) -> StatusCode;

    /// Used for downcasting a `dyn ErrorExt` back to a concrete type.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Whether a caller may retry the operation that produced this error.
    fn is_retryable(&self) -> bool {
        self.status_code().is_retryable()
    }

    /// A message safe to surface to an end user or a model: internal-ish
    /// status codes are collapsed to a generic message carrying only the
    /// numeric code, while user-actionable codes show the full display text.
    fn output_msg(&self) -> String {
        match self.status_code() {
            StatusCode::Internal | StatusCode::Unknown => {
                format!("Internal error: {}", self.status_code() as i32)
            }
            _ => self.to_string(),
        }
    }
}

/// A minimal concrete error carrying just a message and a status code, for
/// call sites that don't need their own `snafu` enum.
#[derive(Debug)]
pub struct PlainError {
    message: String,
    status_code: StatusCode,
}

impl PlainError {
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PlainError {}

impl ErrorExt for PlainError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// A boxed error wrapping an arbitrary `std::error::Error` source with an
/// attached status code, for adapting library errors (e.g. `std::io::Error`)
/// at a crate boundary without a dedicated enum variant.
#[derive(Debug)]
pub struct BoxedError {
    source: Box<dyn std::error::Error + Send + Sync>,
    status_code: StatusCode,
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for BoxedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl ErrorExt for BoxedError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Wrap any `Send + Sync` error with a status code.
pub fn boxed(
    source: impl std::error::Error + Send + Sync + 'static,
    status_code: StatusCode,
) -> BoxedError {
    BoxedError {
        source: Box::new(source),
        status_code,
    }
}

#[cfg(test)]
#[path = "ext.test.rs"]
mod tests;
