//! Shared error classification used by every crate in this workspace:
//! the [`StatusCode`] taxonomy, the [`ErrorExt`] trait domain errors
//! implement, and the [`stack_trace_debug`] attribute macro.

mod ext;
mod status_code;

pub use cea_stack_trace_macro::stack_trace_debug;
pub use ext::BoxedError;
pub use ext::ErrorExt;
pub use ext::PlainError;
pub use ext::boxed;
pub use status_code::StatusCategory;
pub use status_code::StatusCode;
pub use status_code::StatusMeta;

/// Source location captured at the point an error was constructed.
///
/// Re-exported from `snafu` so that `#[snafu(implicit)] location: Location`
/// fields across the workspace share one type.
pub use snafu::Location;
