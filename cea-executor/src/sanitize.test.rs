use super::*;

#[test]
fn strips_csi_sequences() {
    let raw = b"\x1b[31mhello\x1b[0m world";
    assert_eq!(sanitize(raw), "hello world");
}

#[test]
fn strips_osc_sequences() {
    let raw = b"\x1b]0;window title\x07hello";
    assert_eq!(sanitize(raw), "hello");
}

#[test]
fn removes_carriage_returns() {
    let raw = b"line1\r\nline2\r\n";
    assert_eq!(sanitize(raw), "line1\nline2\n");
}

#[test]
fn collapses_long_newline_runs() {
    let raw = b"a\r\n\r\n\r\n\r\nb";
    assert_eq!(sanitize(raw), "a\n\nb");
}

#[test]
fn leaves_plain_text_untouched() {
    assert_eq!(sanitize(b"hello\n"), "hello\n");
}
