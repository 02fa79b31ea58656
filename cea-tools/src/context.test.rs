use std::path::PathBuf;

use super::*;

#[test]
fn resolves_relative_paths_against_cwd() {
    let ctx = ToolContext::new("/workspace", "session-1");
    assert_eq!(ctx.resolve_path("src/main.rs"), PathBuf::from("/workspace/src/main.rs"));
}

#[test]
fn leaves_absolute_paths_untouched() {
    let ctx = ToolContext::new("/workspace", "session-1");
    assert_eq!(ctx.resolve_path("/etc/hosts"), PathBuf::from("/etc/hosts"));
}

#[test]
fn skills_dir_defaults_under_the_dot_cea_directory() {
    let ctx = ToolContext::new("/workspace", "session-42");
    assert_eq!(ctx.skills_dir, PathBuf::from("/workspace/.cea/skills"));
}
