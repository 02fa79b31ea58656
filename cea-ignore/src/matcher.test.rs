use super::*;

#[test]
fn test_extension_pattern() {
    let matcher = PatternMatcher::new(&["**/*.exe"]).expect("valid glob");
    assert!(matcher.is_match("/project/target/debug/main.exe"));
    assert!(matcher.is_match("main.exe"));
    assert!(!matcher.is_match("/project/src/main.rs"));
}

#[test]
fn test_directory_pattern() {
    let matcher = PatternMatcher::new(&["**/node_modules/**"]).expect("valid glob");
    assert!(matcher.is_match("/project/node_modules/pkg/index.js"));
    assert!(!matcher.is_match("/project/src/index.js"));
}

#[test]
fn test_git_directory() {
    let matcher = PatternMatcher::new(&["**/.git/**"]).expect("valid glob");
    assert!(matcher.is_match("/project/.git/config"));
    assert!(!matcher.is_match("/project/.gitignore"));
}

#[test]
fn test_default_excludes() {
    let matcher = PatternMatcher::default_excludes().expect("valid globs");
    assert!(matcher.is_match("/project/node_modules/pkg/index.js"));
    assert!(matcher.is_match("/project/.git/config"));
    assert!(matcher.is_match("/project/main.exe"));
    assert!(matcher.is_match("/project/dist/bundle.js"));
    assert!(matcher.is_match("/project/.DS_Store"));
    assert!(!matcher.is_match("/project/src/main.rs"));
    assert!(!matcher.is_match("/project/package.json"));
}

#[test]
fn test_empty_matcher() {
    let matcher = PatternMatcher::default();
    assert!(!matcher.is_match("/any/path.txt"));
}

#[test]
fn test_edge_case_distribute_vs_dist() {
    let matcher = PatternMatcher::new(&["**/dist/**"]).expect("valid glob");
    assert!(matcher.is_match("/project/dist/bundle.js"));
    assert!(!matcher.is_match("/project/distribute/file.js"));
}
