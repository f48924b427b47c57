//! Plaintext-to-ciphertext transformation.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::table::{build_table, reduce_key};
use crate::text::seed_hash;
use crate::types::Digraph;

/// Encode `text` under `keyword` with the given alphabet and separator.
///
/// Each alphabet symbol becomes one of its cell's candidate digraphs followed
/// by the separator; symbols outside the alphabet pass through verbatim with
/// no separator. Which candidate is chosen depends on a per-symbol keyed
/// shuffle and on how many times the symbol has already occurred in this
/// call, so repeated symbols cycle through different representations while
/// the whole mapping stays exactly reproducible from the keyword.
///
/// The candidate shuffle is seeded by the raw keyword plus the plaintext
/// symbol. The seed does not include the symbol's position, so the shuffled
/// order is fixed for all occurrences of that symbol within the call and the
/// occurrence counter alone drives the cycling.
pub fn encode_text(alphabet: &[char], separator: &[char], text: &str, keyword: &str) -> String {
    let key: Vec<char> = keyword.chars().collect();
    let table = build_table(alphabet, &reduce_key(&key, alphabet));

    let mut result = String::new();
    let mut counters: HashMap<char, usize> = HashMap::new();

    for c in text.chars() {
        if !alphabet.contains(&c) {
            result.push(c);
            continue;
        }

        // Union of candidate sets over every cell holding this symbol.
        // At least one cell exists: the table base covers the whole alphabet.
        let mut combos: Vec<Digraph> = Vec::new();
        for (i, j) in table.cells_of(c) {
            combos.extend(table.candidates(i, j));
        }

        let mut seed_input = key.clone();
        seed_input.push(c);
        let mut rng = StdRng::seed_from_u64(seed_hash(&seed_input));
        combos.shuffle(&mut rng);

        let count = counters.entry(c).or_insert(0);
        let chosen = combos[*count % combos.len()];
        *count += 1;

        result.extend(chosen);
        result.extend(separator.iter());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_alphabet_symbol_becomes_digraph_plus_separator() {
        let out = encode_text(&chars("ABCD"), &chars(" "), "A", "B");
        assert_eq!(out.chars().count(), 3);
        assert_eq!(out.chars().last(), Some(' '));
    }

    #[test]
    fn test_foreign_symbols_pass_through_without_separator() {
        let out = encode_text(&chars("ABCD"), &chars("|"), "A-B", "KEY");
        let cps = chars(&out);

        // digraph, separator, verbatim dash, digraph, separator
        assert_eq!(cps.len(), 7);
        assert_eq!(cps[2], '|');
        assert_eq!(cps[3], '-');
        assert_eq!(cps[6], '|');
    }

    #[test]
    fn test_encode_is_deterministic() {
        let alphabet = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let sep = chars(" ");
        let a = encode_text(&alphabet, &sep, "DETERMINISM", "KEY");
        let b = encode_text(&alphabet, &sep, "DETERMINISM", "KEY");
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_symbol_varies() {
        let alphabet = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let out = encode_text(&alphabet, &chars(" "), "AA", "KEY");
        let tokens: Vec<&str> = out.split(' ').filter(|t| !t.is_empty()).collect();

        assert_eq!(tokens.len(), 2);
        // one cell, eight candidates: the second occurrence takes the next one
        assert_ne!(tokens[0], tokens[1]);
    }

    #[test]
    fn test_empty_separator() {
        let alphabet = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let out = encode_text(&alphabet, &[], "AB", "KEY");
        assert_eq!(out.chars().count(), 4);
    }
}
