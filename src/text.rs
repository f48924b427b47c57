//! Code point utilities shared by the cipher core.
//!
//! The cipher operates on sequences of Unicode code points rather than UTF-8
//! bytes, so a multi-byte symbol (e.g. a Cyrillic letter) occupies exactly one
//! position in the alphabet, the table, and the ciphertext. This module holds
//! the conversions between the two representations, the explicit case folding
//! used by callers that want case-insensitive operation, and the hash that
//! seeds every keyed permutation in the crate.

/// Convert a UTF-8 string into its sequence of Unicode code points.
pub fn to_codepoints(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Convert a sequence of Unicode code points back into a UTF-8 string.
pub fn to_utf8(codepoints: &[char]) -> String {
    codepoints.iter().collect()
}

/// Uppercase a single code point by explicit range checks.
///
/// Covers ASCII `a`–`z` and Cyrillic `а`–`я`, with `ё` mapped separately
/// (it sits outside the contiguous Cyrillic block). Everything else is
/// returned unchanged. The mapping is fixed and never consults the host
/// locale.
pub fn fold_upper(c: char) -> char {
    match c {
        'a'..='z' | 'а'..='я' => char::from_u32(c as u32 - 0x20).unwrap_or(c),
        'ё' => 'Ё',
        _ => c,
    }
}

/// Lowercase a single code point by explicit range checks.
///
/// The inverse of [`fold_upper`]: ASCII `A`–`Z`, Cyrillic `А`–`Я`, and `Ё`.
pub fn fold_lower(c: char) -> char {
    match c {
        'A'..='Z' | 'А'..='Я' => char::from_u32(c as u32 + 0x20).unwrap_or(c),
        'Ё' => 'ё',
        _ => c,
    }
}

/// Uppercase a whole string with [`fold_upper`].
///
/// Callers that want case-insensitive encoding (a Russian-only alphabet is
/// the typical case) fold both text and keyword with this before calling
/// [`crate::Cipher::encode`]; the cipher itself never normalizes.
pub fn fold_upper_str(text: &str) -> String {
    text.chars().map(fold_upper).collect()
}

/// Lowercase a whole string with [`fold_lower`].
pub fn fold_lower_str(text: &str) -> String {
    text.chars().map(fold_lower).collect()
}

/// Deterministic 64-bit polynomial hash over a code-point sequence.
///
/// The classic djb2 recurrence: accumulator starts at 5381 and each code
/// point contributes `hash = hash * 33 + c` in wrapping 64-bit arithmetic.
/// The value seeds the keyed shuffles in table construction and encoding.
/// It is not a cryptographic digest and is never exposed as one.
pub fn seed_hash(codepoints: &[char]) -> u64 {
    let mut hash: u64 = 5381;
    for &c in codepoints {
        hash = hash.wrapping_mul(33).wrapping_add(c as u64);
    }
    hash
}
