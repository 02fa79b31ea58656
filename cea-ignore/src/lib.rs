//! Consistent ignore-pattern filtering shared by the file-reading tools,
//! `glob`, `grep`, and the executor's working-directory resolution.

mod config;
mod matcher;
mod patterns;
mod service;

pub use config::IgnoreConfig;
pub use matcher::PatternMatcher;
pub use patterns::BINARY_FILE_PATTERNS;
pub use patterns::COMMON_DIRECTORY_EXCLUDES;
pub use patterns::COMMON_IGNORE_PATTERNS;
pub use patterns::SYSTEM_FILE_EXCLUDES;
pub use patterns::get_all_default_excludes;
pub use service::IGNORE_FILES;
pub use service::IgnoreService;
pub use service::find_ignore_files;
