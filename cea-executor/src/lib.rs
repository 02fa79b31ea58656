//! Process-group subprocess execution for the shell-execute tool: spawn a
//! command through a platform shell in its own process group, capture and
//! sanitize its merged output, and resolve a single exit code across
//! normal completion, timeout, and cancellation.

mod buffer;
mod executor;
mod sanitize;
mod signal;
mod truncate;

pub use executor::DEFAULT_TIMEOUT_MS;
pub use executor::ExecuteOptions;
pub use executor::ExecuteResult;
pub use executor::StdinMode;
pub use executor::execute;
pub use sanitize::sanitize;
pub use signal::KILL_GRACE;
