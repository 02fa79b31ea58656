use super::*;

#[test]
fn line_hash_is_deterministic() {
    assert_eq!(line_hash(1, "hello"), line_hash(1, "hello"));
}

#[test]
fn line_hash_ignores_whitespace_changes() {
    assert_eq!(line_hash(1, "hello world"), line_hash(1, "  hello   world  "));
}

#[test]
fn blank_lines_salt_by_position() {
    let a = line_hash(1, "");
    let b = line_hash(2, "");
    assert_ne!(a, b);
}

#[test]
fn non_blank_lines_ignore_position() {
    let a = line_hash(1, "hello");
    let b = line_hash(99, "hello");
    assert_eq!(a, b);
}

#[test]
fn trailing_cr_is_dropped() {
    assert_eq!(line_hash(1, "hello\r"), line_hash(1, "hello"));
}

#[test]
fn token_round_trips_through_alphabet() {
    for byte in 0..=255u8 {
        let token = super::ALPHABET;
        let hi = token[(byte >> 4) as usize];
        let lo = token[(byte & 0x0F) as usize];
        let s = format!("{}{}", hi as char, lo as char);
        assert_eq!(token_to_byte(&s), Some(byte));
    }
}

#[test]
fn file_hash_changes_with_content() {
    assert_ne!(file_hash("alpha"), file_hash("beta"));
    assert_eq!(file_hash("alpha"), file_hash("alpha"));
}

#[test]
fn file_hash_is_eight_hex_chars() {
    let h = file_hash("anything");
    assert_eq!(h.len(), 8);
    assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
}
