//! Utility functions for character-level text processing.

/// Lowercase a single character, one-to-one.
///
/// `char::to_lowercase` can expand (`'İ'` becomes `"i̇"`). Alignment indices must
/// keep pointing at original characters, so only the first character of the
/// expansion is kept.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-fold a text into characters. Output length equals `text.chars().count()`.
///
/// - "Hello" → `['h', 'e', 'l', 'l', 'o']`
/// - "ÀB" → `['à', 'b']`
pub fn fold(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// Common prefix length of two character slices.
pub fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(ca, cb)| ca == cb).count()
}

/// Common suffix length of two character slices.
pub fn common_suffix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(ca, cb)| ca == cb)
        .count()
}
