use super::*;

#[test]
fn session_ids_follow_the_expected_shape() {
    let id = new_session_id();
    let mut parts = id.splitn(3, '-');
    assert_eq!(parts.next(), Some("session"));
    let millis: u128 = parts.next().expect("millis part").parse().expect("millis parses");
    assert!(millis > 0);
    let suffix = parts.next().expect("suffix part");
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn session_ids_are_not_all_identical() {
    let a = new_session_id();
    let b = new_session_id();
    assert_ne!(a, b);
}
