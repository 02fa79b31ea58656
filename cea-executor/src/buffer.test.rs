use super::*;

#[test]
fn accumulates_small_chunks() {
    let mut buf = RingBuffer::new();
    buf.push(b"hello ");
    buf.push(b"world");
    assert_eq!(buf.as_bytes(), b"hello world");
    assert_eq!(buf.dropped_bytes(), 0);
}

#[test]
fn trims_once_soft_cap_is_exceeded() {
    let mut buf = RingBuffer::new();
    buf.push(&vec![b'a'; SOFT_CAP_BYTES + 1]);
    assert_eq!(buf.as_bytes().len(), TRIM_TO_BYTES);
    assert_eq!(buf.dropped_bytes(), (SOFT_CAP_BYTES + 1 - TRIM_TO_BYTES) as u64);
}

#[test]
fn tracks_cumulative_dropped_bytes_across_pushes() {
    let mut buf = RingBuffer::new();
    buf.push(&vec![b'a'; SOFT_CAP_BYTES + 1]);
    let dropped_after_first = buf.dropped_bytes();
    buf.push(&vec![b'b'; 10]);
    assert_eq!(buf.dropped_bytes(), dropped_after_first);
    buf.push(&vec![b'c'; SOFT_CAP_BYTES]);
    assert!(buf.dropped_bytes() > dropped_after_first);
}
