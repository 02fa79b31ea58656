use cea_error::ErrorExt;
use tempfile::TempDir;

use super::*;
use crate::item::TodoPriority;

fn item(id: &str, content: &str, status: TodoStatus) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        content: content.to_string(),
        status,
        priority: TodoPriority::Medium,
        description: None,
    }
}

#[test]
fn incomplete_is_empty_when_no_file_exists_yet() {
    let dir = TempDir::new().expect("tempdir");
    let store = TodoStore::new(dir.path(), "session-1");
    assert_eq!(store.incomplete().expect("ok"), Vec::new());
}

#[test]
fn write_then_incomplete_round_trips_pending_and_in_progress_only() {
    let dir = TempDir::new().expect("tempdir");
    let store = TodoStore::new(dir.path(), "session-1");
    let todos = vec![
        item("1", "write tests", TodoStatus::Pending),
        item("2", "review PR", TodoStatus::InProgress),
        item("3", "ship it", TodoStatus::Completed),
        item("4", "abandoned idea", TodoStatus::Cancelled),
    ];
    store.write(&todos).expect("write succeeds");

    let incomplete = store.incomplete().expect("read succeeds");
    assert_eq!(incomplete.len(), 2);
    assert_eq!(incomplete[0].id, "1");
    assert_eq!(incomplete[1].id, "2");
}

#[test]
fn write_rejects_empty_content() {
    let dir = TempDir::new().expect("tempdir");
    let store = TodoStore::new(dir.path(), "session-1");
    let todos = vec![item("1", "   ", TodoStatus::Pending)];
    let err = store.write(&todos).expect_err("empty content rejected");
    assert_eq!(err.status_code(), cea_error::StatusCode::InvalidArguments);
}

#[test]
fn write_creates_both_json_and_markdown_files() {
    let dir = TempDir::new().expect("tempdir");
    let store = TodoStore::new(dir.path(), "session-1");
    store
        .write(&[item("1", "write tests", TodoStatus::Pending)])
        .expect("write succeeds");

    let json_path = dir.path().join(".cea").join("session-1.json");
    let md_path = dir.path().join(".cea").join("session-1.md");
    assert!(json_path.exists());
    assert!(md_path.exists());

    let markdown = fs::read_to_string(&md_path).expect("readable");
    assert!(markdown.contains("## Pending"));
    assert!(markdown.contains("write tests"));
}

#[test]
fn incomplete_swallows_malformed_json() {
    let dir = TempDir::new().expect("tempdir");
    let store = TodoStore::new(dir.path(), "session-1");
    let cea_dir = dir.path().join(".cea");
    fs::create_dir_all(&cea_dir).expect("mkdir");
    fs::write(cea_dir.join("session-1.json"), b"not json at all").expect("write");

    assert_eq!(store.incomplete().expect("malformed json is swallowed"), Vec::new());
}

#[test]
fn different_sessions_use_different_files() {
    let dir = TempDir::new().expect("tempdir");
    let store_a = TodoStore::new(dir.path(), "session-a");
    let store_b = TodoStore::new(dir.path(), "session-b");
    store_a
        .write(&[item("1", "task a", TodoStatus::Pending)])
        .expect("write succeeds");

    assert_eq!(store_b.incomplete().expect("ok"), Vec::new());
    assert_eq!(store_a.incomplete().expect("ok").len(), 1);
}
