//! UTF-8 boundary helpers
//!
//! The preview cuts text at a character count, and `char` boundaries
//! rarely line up with byte offsets once the text contains anything
//! outside ASCII. These helpers turn arbitrary offsets into slice-safe
//! ones so `text[..n]` never panics mid-character.

/// Largest byte index at or below `index` that sits on a char boundary.
///
/// Clamps to the string length. Same contract as the unstable
/// `str::floor_char_boundary`.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Slice from the start of `s` to at most `end` bytes, backing off to a
/// char boundary when `end` lands inside a character.
#[inline]
pub fn safe_slice_to(s: &str, end: usize) -> &str {
    &s[..floor_char_boundary(s, end)]
}

/// Byte offset where the `char_index`-th character starts.
///
/// Indexes past the end answer with the string length, so the result is
/// always sliceable.
pub fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
