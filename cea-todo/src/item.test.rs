use super::*;

#[test]
fn status_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&TodoStatus::InProgress).expect("serializable"), "\"in_progress\"");
}

#[test]
fn priority_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TodoPriority::High).expect("serializable"), "\"high\"");
}

#[test]
fn completed_and_cancelled_are_not_incomplete() {
    assert!(!TodoStatus::Completed.is_incomplete());
    assert!(!TodoStatus::Cancelled.is_incomplete());
    assert!(TodoStatus::Pending.is_incomplete());
    assert!(TodoStatus::InProgress.is_incomplete());
}

#[test]
fn description_is_omitted_from_json_when_absent() {
    let item = TodoItem {
        id: "1".to_string(),
        content: "write tests".to_string(),
        status: TodoStatus::Pending,
        priority: TodoPriority::Medium,
        description: None,
    };
    let value = serde_json::to_value(&item).expect("serializable");
    assert!(!value.as_object().expect("object").contains_key("description"));
}
