use std::fs;

use cea_ignore::IgnoreService;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn reads_a_small_file_in_full() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "one\ntwo\nthree").unwrap();

    let ignore = IgnoreService::with_defaults();
    let result = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.unwrap();

    assert_eq!(result.total_lines, 3);
    assert_eq!(result.start_line, 1);
    assert_eq!(result.end_line, 3);
    assert!(!result.truncated);
    assert!(result.numbered_content.contains("one"));
    assert!(result.numbered_content.contains("three"));
}

#[tokio::test]
async fn applies_offset_and_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    let content = (1..=10).map(|n| format!("line{n}")).collect::<Vec<_>>().join("\n");
    fs::write(&path, content).unwrap();

    let ignore = IgnoreService::with_defaults();
    let options = ReadWindowOptions {
        offset: Some(2),
        limit: Some(3),
        ..Default::default()
    };
    let result = read_window(&path, dir.path(), &ignore, &options).await.unwrap();

    assert_eq!(result.start_line, 3);
    assert_eq!(result.end_line, 5);
    assert!(result.truncated);
    assert!(result.numbered_content.contains("line3"));
    assert!(!result.numbered_content.contains("line6"));
}

#[tokio::test]
async fn windows_around_a_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    let content = (1..=20).map(|n| format!("line{n}")).collect::<Vec<_>>().join("\n");
    fs::write(&path, content).unwrap();

    let ignore = IgnoreService::with_defaults();
    let options = ReadWindowOptions {
        around_line: Some(10),
        before: Some(2),
        after: Some(2),
        ..Default::default()
    };
    let result = read_window(&path, dir.path(), &ignore, &options).await.unwrap();

    assert_eq!(result.start_line, 8);
    assert_eq!(result.end_line, 12);
}

#[tokio::test]
async fn rejects_ignored_paths() {
    let dir = tempdir().unwrap();
    let git_dir = dir.path().join(".git");
    fs::create_dir_all(&git_dir).unwrap();
    let path = git_dir.join("config");
    fs::write(&path, "irrelevant").unwrap();

    let ignore = IgnoreService::with_defaults();
    let err = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.expect_err("ignored");
    assert!(matches!(err, ToolError::Ignored { .. }));
}

#[tokio::test]
async fn rejects_binary_extensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("image.png");
    fs::write(&path, [0x89, 0x50, 0x4e, 0x47]).unwrap();

    let ignore = IgnoreService::with_defaults();
    let err = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.expect_err("binary");
    assert!(matches!(err, ToolError::Binary { .. }));
}

#[tokio::test]
async fn rejects_binary_content_with_unrecognized_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weird.dat");
    fs::write(&path, [b'a', b'b', 0u8, b'c']).unwrap();

    let ignore = IgnoreService::with_defaults();
    let err = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.expect_err("binary content");
    assert!(matches!(err, ToolError::Binary { .. }));
}

#[tokio::test]
async fn rejects_files_over_the_size_cap() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.txt");
    fs::write(&path, vec![b'a'; SIZE_CAP_BYTES as usize + 1]).unwrap();

    let ignore = IgnoreService::with_defaults();
    let err = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.expect_err("too large");
    assert!(matches!(err, ToolError::TooLarge { .. }));
}

#[tokio::test]
async fn reports_missing_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let ignore = IgnoreService::with_defaults();
    let err = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.expect_err("not found");
    assert!(matches!(err, ToolError::NotFoundPath { .. }));
}

#[tokio::test]
async fn render_block_wraps_numbered_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "one\ntwo").unwrap();

    let ignore = IgnoreService::with_defaults();
    let result = read_window(&path, dir.path(), &ignore, &ReadWindowOptions::default()).await.unwrap();
    let block = result.render_block();

    assert!(block.starts_with("======== hello.txt L1-L2 ========"));
    assert!(block.ends_with("======== end ========"));
}
