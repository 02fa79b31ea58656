//! Line and file content hashing.

use xxhash_rust::xxh32::xxh32;

/// The 16-letter alphabet a 2-character hashline token is drawn from; each
/// character encodes one nibble of a byte, high nibble first.
pub const ALPHABET: &[u8; 16] = b"ZPMQVRWSNKTXJBYH";

fn nibble_to_char(nibble: u8) -> char {
    ALPHABET[(nibble & 0x0F) as usize] as char
}

fn char_to_nibble(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase() as u8;
    ALPHABET.iter().position(|&b| b == upper).map(|i| i as u8)
}

/// Decode a 2-character hashline token back into the byte it represents.
/// Used only to validate that a caller-supplied token is well-formed.
pub fn token_to_byte(token: &str) -> Option<u8> {
    let mut chars = token.chars();
    let hi = char_to_nibble(chars.next()?)?;
    let lo = char_to_nibble(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some((hi << 4) | lo)
}

fn byte_to_token(byte: u8) -> String {
    let hi = nibble_to_char(byte >> 4);
    let lo = nibble_to_char(byte & 0x0F);
    let mut token = String::with_capacity(2);
    token.push(hi);
    token.push(lo);
    token
}

/// Compute the 2-character hashline token for a single line of text.
///
/// The text is normalized by stripping a trailing `\r` and then every
/// whitespace character. If the normalized text has no letter or digit
/// (a blank or whitespace-only line), the line number is folded into the
/// hash seed so that otherwise-identical blank lines at different
/// positions usually produce different tokens.
pub fn line_hash(line_number: u32, text: &str) -> String {
    let without_cr = text.strip_suffix('\r').unwrap_or(text);
    let normalized: String = without_cr.chars().filter(|c| !c.is_whitespace()).collect();

    let seed = if normalized.chars().any(|c| c.is_alphanumeric()) {
        0
    } else {
        u64::from(line_number)
    };

    let digest = xxh32(normalized.as_bytes(), seed as u32);
    let reduced = (digest % 256) as u8;
    byte_to_token(reduced)
}

/// Compute the 8-hex-character fingerprint of an entire file's content.
pub fn file_hash(content: &str) -> String {
    let digest = xxh32(content.as_bytes(), 0);
    format!("{digest:08x}")
}

#[cfg(test)]
#[path = "hash.test.rs"]
mod tests;
