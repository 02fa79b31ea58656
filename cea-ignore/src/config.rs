//! Configuration for [`crate::IgnoreService`].

/// Controls which ignore sources a [`crate::IgnoreService`] honors.
#[derive(Debug, Clone)]
pub struct IgnoreConfig {
    /// Respect `.gitignore` (and global/repo-exclude git ignore files).
    pub respect_gitignore: bool,
    /// Respect `.ignore` and `.fdignore` files.
    pub respect_ignore: bool,
    /// Include dotfiles and dot-directories in traversal.
    pub include_hidden: bool,
    /// Follow symlinks while walking.
    pub follow_links: bool,
    /// Additional caller-supplied glob excludes, layered on top of the
    /// ignore-file sources above.
    pub custom_excludes: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: true,
            respect_ignore: true,
            include_hidden: false,
            follow_links: false,
            custom_excludes: Vec::new(),
        }
    }
}

impl IgnoreConfig {
    /// A config that honors every available ignore source.
    pub fn respecting_all() -> Self {
        Self {
            respect_gitignore: true,
            respect_ignore: true,
            ..Self::default()
        }
    }

    /// A config that ignores nothing: every file is visible, including
    /// hidden ones. Used when a tool is explicitly asked to bypass
    /// project-level ignore rules.
    pub fn ignoring_none() -> Self {
        Self {
            respect_gitignore: false,
            respect_ignore: false,
            include_hidden: true,
            follow_links: false,
            custom_excludes: Vec::new(),
        }
    }

    pub fn with_gitignore(mut self, value: bool) -> Self {
        self.respect_gitignore = value;
        self
    }

    pub fn with_ignore(mut self, value: bool) -> Self {
        self.respect_ignore = value;
        self
    }

    pub fn with_hidden(mut self, value: bool) -> Self {
        self.include_hidden = value;
        self
    }

    pub fn with_follow_links(mut self, value: bool) -> Self {
        self.follow_links = value;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.custom_excludes = excludes;
        self
    }
}

#[cfg(test)]
#[path = "config.test.rs"]
mod tests;
