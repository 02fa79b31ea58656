use super::*;
use crate::hash::line_hash;

fn anchor(line: u32, text: &str) -> Anchor {
    Anchor::new(line, line_hash(line, text))
}

#[test]
fn replaces_a_single_line() {
    let content = "alpha\nbeta\ngamma\n";
    let edits = vec![HashlineEdit::Replace {
        pos: anchor(2, "beta"),
        end: None,
        lines: vec!["BETA".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\nBETA\ngamma\n");
    assert_eq!(result.first_changed_line, 2);
    assert!(result.no_ops.is_empty());
}

#[test]
fn replaces_an_inclusive_range() {
    let content = "alpha\nbeta\ngamma\ndelta\n";
    let edits = vec![HashlineEdit::Replace {
        pos: anchor(2, "beta"),
        end: Some(anchor(3, "gamma")),
        lines: vec!["X".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\nX\ndelta\n");
}

#[test]
fn replace_identical_text_is_a_no_op() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Replace {
        pos: anchor(1, "alpha"),
        end: None,
        lines: vec!["alpha".to_string()],
    }];
    let err = apply_edits(content, edits, None).unwrap_err();
    assert!(matches!(err, HashlineError::NoChanges { .. }));
}

#[test]
fn appends_after_an_anchor() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Append {
        pos: Some(anchor(1, "alpha")),
        lines: vec!["inserted".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\ninserted\nbeta\n");
    assert_eq!(result.first_changed_line, 2);
}

#[test]
fn appends_at_end_of_file_with_trailing_newline() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Append {
        pos: None,
        lines: vec!["gamma".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\nbeta\ngamma\n");
}

#[test]
fn appends_at_end_of_file_without_trailing_newline() {
    let content = "alpha\nbeta";
    let edits = vec![HashlineEdit::Append {
        pos: None,
        lines: vec!["gamma".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\nbeta\ngamma");
}

#[test]
fn prepends_before_an_anchor() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Prepend {
        pos: Some(anchor(2, "beta")),
        lines: vec!["inserted".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "alpha\ninserted\nbeta\n");
}

#[test]
fn prepends_at_start_of_file() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Prepend {
        pos: None,
        lines: vec!["zero".to_string()],
    }];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "zero\nalpha\nbeta\n");
    assert_eq!(result.first_changed_line, 1);
}

#[test]
fn appends_into_an_empty_file() {
    let edits = vec![HashlineEdit::Append {
        pos: None,
        lines: vec!["first".to_string(), "second".to_string()],
    }];
    let result = apply_edits("", edits, None).expect("applies");
    assert_eq!(result.content, "first\nsecond");
}

#[test]
fn applies_edits_in_descending_order_without_shifting_anchors() {
    let content = "one\ntwo\nthree\n";
    let edits = vec![
        HashlineEdit::Replace {
            pos: anchor(1, "one"),
            end: None,
            lines: vec!["ONE".to_string()],
        },
        HashlineEdit::Append {
            pos: Some(anchor(3, "three")),
            lines: vec!["four".to_string()],
        },
    ];
    let result = apply_edits(content, edits, None).expect("applies");
    assert_eq!(result.content, "ONE\ntwo\nthree\nfour\n");
}

#[test]
fn rejects_out_of_range_anchor() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Replace {
        pos: anchor(9, "nope"),
        end: None,
        lines: vec!["x".to_string()],
    }];
    let err = apply_edits(content, edits, None).unwrap_err();
    assert!(matches!(err, HashlineError::OutOfRange { line: 9, max_line: 2, .. }));
}

#[test]
fn rejects_stale_anchor_hash() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Replace {
        pos: Anchor::new(1, "ZZ"),
        end: None,
        lines: vec!["x".to_string()],
    }];
    let err = apply_edits(content, edits, None).unwrap_err();
    assert!(matches!(err, HashlineError::Mismatch { .. }));
}

#[test]
fn rejects_stale_file_hash() {
    let content = "alpha\nbeta\n";
    let edits = vec![HashlineEdit::Append {
        pos: None,
        lines: vec!["x".to_string()],
    }];
    let err = apply_edits(content, edits, Some("deadbeef")).unwrap_err();
    assert!(matches!(err, HashlineError::StaleFileHash { .. }));
}

#[test]
fn rejects_empty_batch() {
    let err = apply_edits("alpha\n", Vec::new(), None).unwrap_err();
    assert!(matches!(err, HashlineError::EmptyBatch { .. }));
}

#[test]
fn deduplicates_identical_edits() {
    let content = "alpha\nbeta\n";
    let edit = HashlineEdit::Replace {
        pos: anchor(1, "alpha"),
        end: None,
        lines: vec!["ALPHA".to_string()],
    };
    let result = apply_edits(content, vec![edit.clone(), edit], None).expect("applies");
    assert_eq!(result.content, "ALPHA\nbeta\n");
}
