//! Table construction: keyword reduction, grid layout, and keyed digraph
//! generation.
//!
//! Everything in this module is a pure function of its inputs. The same
//! (alphabet, key) pair always produces the same table, which is what lets
//! encode and decode independently rebuild identical tables from the keyword
//! alone.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::text::seed_hash;
use crate::types::{Digraph, Table, EMPTY};

/// Reduce a raw keyword to its ordered, duplicate-free, alphabet-filtered
/// prefix.
///
/// Scans the keyword left to right, keeping each symbol the first time it is
/// seen and only if it belongs to the alphabet. The result biases the table
/// layout toward the keyword without ever introducing symbols the alphabet
/// does not contain.
///
/// # Examples
///
/// ```
/// use varcipher::reduce_key;
///
/// let alphabet: Vec<char> = "ABCDR".chars().collect();
/// let key: Vec<char> = "ABRACADABRA!".chars().collect();
/// assert_eq!(reduce_key(&key, &alphabet), vec!['A', 'B', 'R', 'C', 'D']);
/// ```
pub fn reduce_key(key: &[char], alphabet: &[char]) -> Vec<char> {
    let mut reduced = Vec::new();
    for &c in key {
        if !reduced.contains(&c) && alphabet.contains(&c) {
            reduced.push(c);
        }
    }
    reduced
}

/// Build the substitution table for an alphabet and an already-reduced key.
///
/// The grid starts with the key symbols, followed by the rest of the alphabet
/// in its own order, laid out row-major in the smallest near-square shape:
/// `cols = ceil(sqrt(total))`, `rows = ceil(total / cols)`. Trailing cells
/// hold [`EMPTY`].
///
/// Row and column key digraphs are drawn from disjoint halves of a keyed
/// shuffle of the alphabet. The row generator is seeded by the key's hash,
/// the column generator independently by the hash of `key ++ "_col"`, so the
/// two sequences never mirror each other.
///
/// Callers normally reach this through [`crate::Cipher`]; it is exposed for
/// table inspection and tests. Pass the output of [`reduce_key`], not the raw
/// keyword.
///
/// # Panics
///
/// Panics if `alphabet` has fewer than 4 symbols: the pool split needs two
/// symbols per half to form digraphs. [`crate::Cipher`] enforces this at
/// configuration time, so validated callers never hit it.
pub fn build_table(alphabet: &[char], key: &[char]) -> Table {
    // Key symbols first, then every remaining alphabet symbol once.
    let mut base: Vec<char> = key.to_vec();
    for &c in alphabet {
        if !base.contains(&c) {
            base.push(c);
        }
    }

    let total = base.len();
    let cols = (total as f64).sqrt().ceil() as usize;
    let rows = (total + cols - 1) / cols;

    let mut grid = vec![vec![EMPTY; cols]; rows];
    for (k, &c) in base.iter().enumerate() {
        grid[k / cols][k % cols] = c;
    }

    // Split a keyed shuffle of the full alphabet into the two symbol pools.
    let mut symbols: Vec<char> = alphabet.to_vec();
    let mut rng = StdRng::seed_from_u64(seed_hash(key));
    symbols.shuffle(&mut rng);
    let half = symbols.len() / 2;

    let mut col_key: Vec<char> = key.to_vec();
    col_key.extend("_col".chars());

    let row_keys = generate_keys(seed_hash(key), rows, &symbols[..half]);
    let col_keys = generate_keys(seed_hash(&col_key), cols, &symbols[half..]);

    Table {
        grid,
        row_keys,
        col_keys,
    }
}

/// Draw `count` digraphs from a pool of symbols.
///
/// The pool is shuffled up front, then consumed two symbols at a time. When
/// fewer than two symbols remain for the next draw the pool is reshuffled on
/// the same generator stream and consumption restarts, so a pool of `p`
/// symbols yields `p / 2` distinct digraphs per pass and reuses symbols
/// beyond that.
fn generate_keys(seed: u64, count: usize, pool: &[char]) -> Vec<Digraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut local: Vec<char> = pool.to_vec();
    local.shuffle(&mut rng);

    let mut keys = Vec::with_capacity(count);
    let mut idx = 0;
    for _ in 0..count {
        keys.push([local[idx], local[idx + 1]]);
        idx += 2;

        if idx + 1 >= local.len() {
            local.shuffle(&mut rng);
            idx = 0;
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_reduce_drops_duplicates_and_foreign_symbols() {
        let alphabet = chars("ABCD");
        assert_eq!(reduce_key(&chars("BAOBAB"), &alphabet), chars("BA"));
        assert_eq!(reduce_key(&chars("xyz"), &alphabet), Vec::<char>::new());
        assert_eq!(reduce_key(&[], &alphabet), Vec::<char>::new());
    }

    #[test]
    fn test_base_layout_biased_by_key() {
        let alphabet = chars("ABCD");
        let table = build_table(&alphabet, &chars("B"));

        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.grid, vec![vec!['B', 'A'], vec!['C', 'D']]);
    }

    #[test]
    fn test_shape_near_square_with_sentinel_padding() {
        // 33 symbols: 6 columns, 6 rows, 3 unfilled cells
        let alphabet = chars(crate::alphabet::RUSSIAN);
        let table = build_table(&alphabet, &[]);

        assert_eq!(table.cols(), 6);
        assert_eq!(table.rows(), 6);
        assert_eq!(table.empty_cells(), 3);
    }

    #[test]
    fn test_construction_is_pure() {
        let alphabet = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let key = chars("KEY");
        assert_eq!(build_table(&alphabet, &key), build_table(&alphabet, &key));
    }

    #[test]
    fn test_key_pools_are_disjoint() {
        let alphabet = chars("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        let table = build_table(&alphabet, &chars("KEY"));

        let row_symbols: Vec<char> = table.row_keys.iter().flatten().copied().collect();
        let col_symbols: Vec<char> = table.col_keys.iter().flatten().copied().collect();
        for c in &row_symbols {
            assert!(!col_symbols.contains(c), "{c} appears in both pools");
        }
    }

    #[test]
    fn test_key_count_matches_dimensions() {
        let alphabet = chars(crate::alphabet::MIXED);
        let table = build_table(&alphabet, &chars("ШИФР"));

        assert_eq!(table.row_keys.len(), table.rows());
        assert_eq!(table.col_keys.len(), table.cols());
    }

    #[test]
    fn test_generate_keys_reuses_exhausted_pool() {
        // a 4-symbol pool holds two digraphs per pass; ask for five
        let keys = generate_keys(7, 5, &chars("wxyz"));
        assert_eq!(keys.len(), 5);
        for [a, b] in keys {
            assert!("wxyz".contains(a));
            assert!("wxyz".contains(b));
            assert_ne!(a, b);
        }
    }
}
