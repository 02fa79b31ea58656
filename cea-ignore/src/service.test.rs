use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn test_with_defaults() {
    let service = IgnoreService::with_defaults();
    assert!(service.config().respect_gitignore);
    assert!(service.config().respect_ignore);
}

#[test]
fn test_respects_gitignore() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();

    fs::write(dir.join("keep.rs"), "code").expect("write");
    fs::write(dir.join("ignored.log"), "log").expect("write");
    fs::write(dir.join(".gitignore"), "*.log").expect("write");

    let service = IgnoreService::with_defaults();
    let walker = service.create_walk_builder(dir);

    let files: Vec<_> = walker
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert!(files.contains(&"keep.rs".to_string()));
    assert!(!files.contains(&"ignored.log".to_string()));
}

#[test]
fn test_respects_fdignore() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();

    fs::write(dir.join("keep.rs"), "code").expect("write");
    fs::write(dir.join("secret.env"), "secrets").expect("write");
    fs::write(dir.join(".fdignore"), "*.env").expect("write");

    let service = IgnoreService::with_defaults();
    let walker = service.create_walk_builder(dir);

    let files: Vec<_> = walker
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert!(files.contains(&"keep.rs".to_string()));
    assert!(!files.contains(&"secret.env".to_string()));
}

#[test]
fn test_custom_excludes() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();

    fs::write(dir.join("keep.rs"), "code").expect("write");
    fs::write(dir.join("temp.tmp"), "temp").expect("write");

    let config = IgnoreConfig::default().with_excludes(vec!["*.tmp".to_string()]);
    let service = IgnoreService::new(config);
    let walker = service.create_walk_builder(dir);

    let files: Vec<_> = walker
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert!(files.contains(&"keep.rs".to_string()));
    assert!(!files.contains(&"temp.tmp".to_string()));
}

#[test]
fn test_get_core_patterns() {
    let patterns = IgnoreService::get_core_patterns();
    assert!(patterns.contains(&"**/node_modules/**"));
    assert!(patterns.contains(&"**/.git/**"));
}

#[test]
fn test_is_ignored_default_excludes() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();
    let service = IgnoreService::with_defaults();

    assert!(service.is_ignored(dir, &dir.join("node_modules/pkg/index.js")));
    assert!(!service.is_ignored(dir, &dir.join("src/main.rs")));
}

#[test]
fn test_is_ignored_respects_gitignore_file() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();
    fs::write(dir.join(".gitignore"), "secrets.txt\n").expect("write");

    let service = IgnoreService::with_defaults();
    assert!(service.is_ignored(dir, &dir.join("secrets.txt")));
    assert!(!service.is_ignored(dir, &dir.join("public.txt")));
}

#[test]
fn test_is_ignored_respects_nested_gitignore_in_subdirectory() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();
    fs::create_dir_all(dir.join("a/b")).expect("create dirs");
    fs::write(dir.join("a/b/.gitignore"), "secrets.txt\n").expect("write");

    let service = IgnoreService::with_defaults();
    assert!(service.is_ignored(dir, &dir.join("a/b/secrets.txt")));
    assert!(!service.is_ignored(dir, &dir.join("a/b/public.txt")));
}

#[test]
fn test_is_ignored_respects_nested_ignore_file_in_subdirectory() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();
    fs::create_dir_all(dir.join("sub")).expect("create dirs");
    fs::write(dir.join("sub/.ignore"), "*.log\n").expect("write");

    let service = IgnoreService::with_defaults();
    assert!(service.is_ignored(dir, &dir.join("sub/build.log")));
    assert!(!service.is_ignored(dir, &dir.join("sub/build.rs")));
}

#[test]
fn test_find_ignore_files_single() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();

    fs::write(dir.join(".ignore"), "*.log").expect("write file");

    let files = find_ignore_files(dir);
    assert!(!files.is_empty());
    assert!(files.iter().any(|f| f.ends_with(".ignore")));
}

#[test]
fn test_find_ignore_files_stops_at_git_ancestor() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();
    fs::create_dir_all(dir.join("repo/src")).expect("create dirs");
    fs::create_dir_all(dir.join(".git")).expect("create dir");
    fs::write(dir.join("repo/.ignore"), "*.log").expect("write");

    let files = find_ignore_files(&dir.join("repo/src"));
    assert!(files.iter().any(|f| f.ends_with(".ignore")));
}

#[test]
fn test_find_ignore_files_no_duplicates() {
    let temp = tempdir().expect("create temp dir");
    let dir = temp.path();

    fs::write(dir.join(".ignore"), "*.log").expect("write file");

    let files = find_ignore_files(dir);
    let root_count = files
        .iter()
        .filter(|f| f.parent().map(|p| p == dir).unwrap_or(false) && f.ends_with(".ignore"))
        .count();

    assert_eq!(root_count, 1, "should not have duplicate root ignore file");
}
