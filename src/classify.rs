//! Single-byte character classes used by the scanner.

/// 7-bit ASCII (0..=127).
#[inline]
pub fn is_ascii(b: u8) -> bool {
    b <= 0x7F
}

/// Printable ASCII, space through tilde.
#[inline]
pub fn is_print(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_lowercase()
}

/// Letters plus underscore; these bytes make up a letter run.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    is_letter(b) || b == b'_'
}
