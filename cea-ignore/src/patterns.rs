//! Default glob patterns applied regardless of project-level ignore files.

/// Version control and tooling directories that are never useful to a tool.
pub const COMMON_IGNORE_PATTERNS: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/.svn/**",
    "**/.hg/**",
];

/// Extensions that are essentially always binary.
pub const BINARY_FILE_PATTERNS: &[&str] = &[
    "**/*.exe",
    "**/*.dll",
    "**/*.so",
    "**/*.dylib",
    "**/*.a",
    "**/*.o",
    "**/*.zip",
    "**/*.tar",
    "**/*.gz",
    "**/*.rar",
    "**/*.7z",
    "**/*.png",
    "**/*.jpg",
    "**/*.jpeg",
    "**/*.gif",
    "**/*.pdf",
];

/// Build output and cache directories.
pub const COMMON_DIRECTORY_EXCLUDES: &[&str] = &[
    "**/dist/**",
    "**/build/**",
    "**/coverage/**",
    "**/.vscode/**",
    "**/.idea/**",
    "**/__pycache__/**",
    "**/target/**",
];

/// OS- and editor-generated housekeeping files.
pub const SYSTEM_FILE_EXCLUDES: &[&str] = &["**/.DS_Store", "**/Thumbs.db"];

/// All default exclude patterns combined, in a freshly allocated vector.
pub fn get_all_default_excludes() -> Vec<&'static str> {
    let mut patterns = Vec::with_capacity(
        COMMON_IGNORE_PATTERNS.len()
            + BINARY_FILE_PATTERNS.len()
            + COMMON_DIRECTORY_EXCLUDES.len()
            + SYSTEM_FILE_EXCLUDES.len(),
    );
    patterns.extend(COMMON_IGNORE_PATTERNS);
    patterns.extend(BINARY_FILE_PATTERNS);
    patterns.extend(COMMON_DIRECTORY_EXCLUDES);
    patterns.extend(SYSTEM_FILE_EXCLUDES);
    patterns
}

#[cfg(test)]
#[path = "patterns.test.rs"]
mod tests;
