//! Error types for cipher configuration.

use thiserror::Error;

/// Errors raised when a cipher is constructed or reconfigured.
///
/// Encoding and decoding themselves are infallible once a configuration has
/// been accepted; all validation happens at the configuration boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The alphabet contains no symbols, so no table can be laid out.
    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    /// The alphabet is too small to split into row and column key pools.
    /// Each pool needs at least two symbols to form a digraph.
    #[error("alphabet needs at least 4 symbols to form key pools, got {0}")]
    AlphabetTooSmall(usize),
}
