//! File ignore service for consistent file filtering.

use std::path::Path;
use std::path::PathBuf;

use ignore::WalkBuilder;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use ignore::overrides::OverrideBuilder;
use walkdir::WalkDir;

use crate::config::IgnoreConfig;
use crate::matcher::PatternMatcher;
use crate::patterns::BINARY_FILE_PATTERNS;
use crate::patterns::COMMON_DIRECTORY_EXCLUDES;
use crate::patterns::COMMON_IGNORE_PATTERNS;
use crate::patterns::SYSTEM_FILE_EXCLUDES;

/// Ignore file names consulted in addition to `.gitignore`: ripgrep's
/// `.ignore` and fd's `.fdignore`, both given the same gitignore syntax.
pub const IGNORE_FILES: &[&str] = &[".ignore", ".fdignore"];

/// How far up the directory tree [`find_ignore_files`] walks before giving
/// up, for a root with no `.git` ancestor.
const MAX_PARENT_DEPTH: usize = 20;

/// Service for handling file ignore patterns.
///
/// Provides consistent file filtering behavior across the file-reading
/// tools, `glob`, and the directory walk backing `grep`.
#[derive(Debug, Clone)]
pub struct IgnoreService {
    config: IgnoreConfig,
}

impl IgnoreService {
    pub fn new(config: IgnoreConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(IgnoreConfig::default())
    }

    /// Create a `WalkBuilder` with all ignore rules applied, for recursive
    /// traversal (`glob`, `grep`'s file list).
    pub fn create_walk_builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);

        if self.config.respect_gitignore {
            builder.git_ignore(true).git_global(true).git_exclude(true);
        } else {
            builder
                .git_ignore(false)
                .git_global(false)
                .git_exclude(false);
        }

        if self.config.respect_ignore {
            for name in IGNORE_FILES {
                builder.add_custom_ignore_filename(name);
            }
        }

        builder
            .hidden(!self.config.include_hidden)
            .follow_links(self.config.follow_links)
            .require_git(false);

        if !self.config.custom_excludes.is_empty()
            && let Ok(overrides) = self.build_overrides(root)
        {
            builder.overrides(overrides);
        }

        builder
    }

    fn build_overrides(&self, root: &Path) -> Result<ignore::overrides::Override, ignore::Error> {
        let mut override_builder = OverrideBuilder::new(root);
        for pattern in &self.config.custom_excludes {
            override_builder.add(&format!("!{pattern}"))?;
        }
        override_builder.build()
    }

    /// Check whether a single path should be treated as ignored, without
    /// walking the rest of the tree.
    ///
    /// Builds a `Gitignore` matcher from every nested `.gitignore`/`.ignore`/
    /// `.fdignore` found above and beneath `root` (see [`find_ignore_files`]),
    /// so a file ignored only by a `.gitignore` in some subdirectory of
    /// `root` is still caught, plus the default exclude patterns and any
    /// custom excludes. `path` must lie within `root`; callers that let a
    /// path escape the project root (via `..`) should skip this check
    /// entirely rather than calling it, since ignore files outside the
    /// project are not this service's concern.
    pub fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        if let Ok(defaults) = PatternMatcher::default_excludes()
            && defaults.is_match(&path.to_string_lossy())
        {
            return true;
        }

        if !self.config.custom_excludes.is_empty() {
            let refs: Vec<&str> = self.config.custom_excludes.iter().map(String::as_str).collect();
            if let Ok(custom) = PatternMatcher::new(&refs)
                && custom.is_match(&path.to_string_lossy())
            {
                return true;
            }
        }

        let is_dir = path.is_dir();
        match self.compile_gitignore(root) {
            Some(gitignore) => gitignore.matched(path, is_dir).is_ignore(),
            None => false,
        }
    }

    /// Build one `Gitignore` matcher from every `.gitignore`/`.ignore`/
    /// `.fdignore` file [`find_ignore_files`] finds above and beneath `root`,
    /// each added in outer-to-inner order so a more deeply nested file's
    /// patterns take precedence over an ancestor's, matching the builder's
    /// own "last matching glob wins" rule. `GitignoreBuilder::add` anchors
    /// each file's patterns to its own containing directory, so it's safe to
    /// feed in files from unrelated sibling directories too.
    fn compile_gitignore(&self, root: &Path) -> Option<Gitignore> {
        if !self.config.respect_gitignore && !self.config.respect_ignore {
            return None;
        }

        let mut builder = GitignoreBuilder::new(root);
        for file in find_ignore_files(root) {
            let is_gitignore = file.file_name().is_some_and(|name| name == ".gitignore");
            if is_gitignore {
                if !self.config.respect_gitignore {
                    continue;
                }
            } else if !self.config.respect_ignore {
                continue;
            }
            let _ = builder.add(file);
        }
        builder.build().ok()
    }

    /// Get common ignore patterns for basic operations.
    pub fn get_core_patterns() -> &'static [&'static str] {
        COMMON_IGNORE_PATTERNS
    }

    /// Get all default exclude patterns combined.
    pub fn get_default_excludes() -> Vec<&'static str> {
        let mut patterns = Vec::new();
        patterns.extend(COMMON_IGNORE_PATTERNS);
        patterns.extend(BINARY_FILE_PATTERNS);
        patterns.extend(COMMON_DIRECTORY_EXCLUDES);
        patterns.extend(SYSTEM_FILE_EXCLUDES);
        patterns
    }

    pub fn config(&self) -> &IgnoreConfig {
        &self.config
    }
}

impl Default for IgnoreService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// All ignore-file names [`find_ignore_files`] collects: `.gitignore` plus
/// the ripgrep/fd equivalents in [`IGNORE_FILES`].
const ALL_IGNORE_FILE_NAMES: &[&str] = &[".gitignore", ".ignore", ".fdignore"];

/// Find all `.gitignore`/`.ignore`/`.fdignore` files relevant to `root`.
///
/// Searches up through parent directories (stopping at a `.git` ancestor or
/// after `MAX_PARENT_DEPTH` levels) and down into subdirectories, so nested
/// ignore files are honored the same way ripgrep honors them. Returned in
/// outer-to-inner order: ancestor files first, then descendants depth-first.
pub fn find_ignore_files(root: &Path) -> Vec<PathBuf> {
    let mut ignore_files = Vec::new();

    let mut current = Some(root.to_path_buf());
    let mut depth = 0;
    while let Some(dir) = current {
        for name in ALL_IGNORE_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                ignore_files.push(path);
            }
        }
        depth += 1;
        if depth >= MAX_PARENT_DEPTH || dir.join(".git").exists() {
            break;
        }
        current = dir.parent().map(Path::to_path_buf);
    }

    if root.is_dir() {
        for entry in WalkDir::new(root)
            .max_depth(10)
            .into_iter()
            .filter_map(Result::ok)
        {
            if entry.file_type().is_file() {
                let name = entry.file_name().to_string_lossy();
                if ALL_IGNORE_FILE_NAMES.iter().any(|&n| n == name) {
                    let path = entry.path().to_path_buf();
                    if !ignore_files.contains(&path) {
                        ignore_files.push(path);
                    }
                }
            }
        }
    }

    ignore_files
}

#[cfg(test)]
#[path = "service.test.rs"]
mod tests;
