//! varcipher - keyed homophonic substitution over a Polybius-style table
//!
//! This crate implements a classical pen-and-paper style cipher with a
//! twist: every plaintext symbol has several valid ciphertext digraphs, and
//! repeated occurrences cycle through them, flattening the frequency profile
//! that breaks plain substitution ciphers. The whole scheme is driven by a
//! keyword: the same keyword that encoded a text decodes it, with no other
//! shared state.
//!
//! # Features
//!
//! - **Keyed**: the keyword biases the table layout and seeds every
//!   pseudo-random choice; nothing else needs to be exchanged
//! - **Homophonic**: each symbol owns eight candidate digraphs per cell,
//!   cycled across repeated occurrences
//! - **Deterministic**: identical configuration, text, and keyword always
//!   produce byte-identical ciphertext
//! - **Unicode-aware**: alphabets, separators, and text are handled as code
//!   points, so Cyrillic and mixed-script alphabets just work
//!
//! # Quick Start
//!
//! ```
//! use varcipher::{alphabet, Cipher};
//!
//! let cipher = Cipher::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ")?;
//!
//! let ciphertext = cipher.encode("ATTACK AT DAWN", "LEMON");
//! let plaintext = cipher.decode(&ciphertext, "LEMON");
//! assert_eq!(plaintext, "ATTACK AT DAWN");
//!
//! // built-in alphabet presets
//! let russian = Cipher::new(alphabet::RUSSIAN)?;
//! let ct = russian.encode("ШИФР", "КЛЮЧ");
//! assert_eq!(russian.decode(&ct, "КЛЮЧ"), "ШИФР");
//! # Ok::<(), varcipher::CipherError>(())
//! ```
//!
//! # How it works
//!
//! The keyword is reduced to its alphabet-filtered, deduplicated prefix and
//! laid into a near-square grid ahead of the remaining alphabet. A keyed
//! shuffle of the alphabet is split in half to form row and column symbol
//! pools, and every row and column receives a 2-symbol key drawn from its
//! pool. A cell's candidate digraphs pair its row-key symbols with its
//! column-key symbols in both orders; encoding picks among them with a
//! keyed, occurrence-counted selection, and decoding searches the grid for
//! the cell whose candidate set contains each token.
//!
//! # Caveats
//!
//! The pseudo-randomness is seeded from a polynomial hash of the keyword and
//! is **not** cryptographically strong; this is a study of a classical
//! cipher design, not a modern encryption scheme. Decoding assumes
//! well-formed ciphertext (one separator after every digraph) and silently
//! skips anything it cannot place.

// Re-export the main cipher interface
pub use cipher::Cipher;
pub use error::CipherError;

// Re-export the table layer for inspection and tests
pub use crate::core::{build_table, decode_text, encode_text, reduce_key};
pub use types::{Digraph, Table, EMPTY};

// Re-export the code point utilities used by case-insensitive callers
pub use text::{fold_lower, fold_lower_str, fold_upper, fold_upper_str};
pub use text::{seed_hash, to_codepoints, to_utf8};

// Module declarations
pub mod alphabet;
pub mod cipher;
pub mod core;
pub mod error;
pub mod text;
pub mod types;
