use super::*;

#[test]
fn success_is_zero() {
    assert!(StatusCode::is_success(0));
    assert_eq!(StatusCode::Success as i32, 0);
}

#[test]
fn retryable_flags() {
    assert!(StatusCode::Timeout.is_retryable());
    assert!(!StatusCode::InvalidArguments.is_retryable());
    assert!(StatusCode::Internal.is_retryable());
}

#[test]
fn from_i32_round_trips() {
    assert_eq!(StatusCode::from_i32(13_003), Some(StatusCode::HashlineMismatch));
    assert_eq!(StatusCode::from_i32(99_999), None);
}

#[test]
fn tool_category_values() {
    assert_eq!(StatusCode::IgnoredPath.category(), StatusCategory::Tool);
    assert_eq!(StatusCode::AutoContinueLimit as i32, 13_009);
}
