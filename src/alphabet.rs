//! Built-in alphabets.
//!
//! An alphabet is just an ordered string of symbols; anything not in it
//! passes through the cipher unchanged, so pick (or build) one that covers
//! the text you care about.

/// The 33-letter uppercase Russian alphabet, Ё included.
///
/// Pair with [`crate::text::fold_upper_str`] on both text and keyword for
/// case-insensitive operation.
pub const RUSSIAN: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// A mixed alphabet: Latin and Cyrillic in both cases, digits, and common
/// punctuation (space included).
///
/// Note that the space character doubles as the default separator; decoding
/// still works because the cursor skips separator positions by stride rather
/// than by inspection.
pub const MIXED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         abcdefghijklmnopqrstuvwxyz\
                         АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ\
                         абвгдеёжзийклмнопрстуфхцчшщъыьэюя\
                         0123456789 .,!?-:;()\"'";
