//! Ciphertext-to-plaintext transformation.

use crate::core::table::{build_table, reduce_key};
use crate::types::{Digraph, Table};

/// Decode `text` under `keyword` with the given alphabet and separator.
///
/// The table is rebuilt exactly as [`crate::core::encode_text`] builds it,
/// then the ciphertext is walked with a cursor: runs of non-alphabet symbols
/// are copied through verbatim, and each 2-symbol token is resolved to the
/// first table cell (row-major) whose candidate set contains it.
///
/// The cursor advances by `2 + separator length` after every token on the
/// assumption that exactly one separator follows each digraph; hand-edited or
/// malformed ciphertext desynchronizes it. A token no cell claims emits
/// nothing, and a lone trailing symbol is never examined (the cursor always
/// needs two symbols ahead). Both are deliberate, permissive behaviors: the
/// decoder skips what it cannot place rather than failing the whole call.
pub fn decode_text(alphabet: &[char], separator: &[char], text: &str, keyword: &str) -> String {
    let key: Vec<char> = keyword.chars().collect();
    let table = build_table(alphabet, &reduce_key(&key, alphabet));

    let text: Vec<char> = text.chars().collect();
    let stride = 2 + separator.len();

    let mut result = String::new();
    let mut i = 0;
    while i + 1 < text.len() {
        while i + 1 < text.len() && !alphabet.contains(&text[i]) {
            result.push(text[i]);
            i += 1;
        }
        if i + 1 >= text.len() {
            break;
        }

        let token: Digraph = [text[i], text[i + 1]];
        if let Some(symbol) = resolve(&table, token) {
            result.push(symbol);
        }

        i += stride;
    }

    result
}

/// Find the symbol of the first cell (row-major) claiming `token`.
///
/// Unfilled cells are skipped: the sentinel they hold is not a plaintext
/// symbol, even though their row/column keys would otherwise match.
fn resolve(table: &Table, token: Digraph) -> Option<char> {
    for i in 0..table.rows() {
        for j in 0..table.cols() {
            let Some(symbol) = table.symbol_at(i, j) else {
                continue;
            };
            if table.candidates(i, j).contains(&token) {
                return Some(symbol);
            }
        }
    }
    None
}
