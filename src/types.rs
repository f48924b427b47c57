//! Core data structures for table construction and digraph lookup.

/// A two-symbol ciphertext unit standing in for one plaintext symbol.
pub type Digraph = [char; 2];

/// Sentinel stored in grid cells left unfilled when `rows * cols` exceeds the
/// number of table symbols. It is outside every practical alphabet and is
/// never matched during decoding.
pub const EMPTY: char = '\0';

/// The Polybius-style substitution table for one (alphabet, key) pair.
///
/// A row-major grid of plaintext symbols plus one key digraph per row and per
/// column. A cell's ciphertext candidates are formed by pairing its row-key
/// symbols with its column-key symbols (see [`Table::candidates`]).
///
/// Tables are cheap to build and carry no identity: encode and decode each
/// construct one fresh from the current configuration and the supplied
/// keyword. Identical inputs always produce an identical table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Grid of plaintext symbols, `rows x cols`, padded with [`EMPTY`].
    pub grid: Vec<Vec<char>>,
    /// One 2-symbol key per row, drawn from the row pool.
    pub row_keys: Vec<Digraph>,
    /// One 2-symbol key per column, drawn from the column pool.
    pub col_keys: Vec<Digraph>,
}

impl Table {
    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// The symbol stored at `(row, col)`, or `None` for an unfilled cell.
    pub fn symbol_at(&self, row: usize, col: usize) -> Option<char> {
        match self.grid[row][col] {
            EMPTY => None,
            c => Some(c),
        }
    }

    /// Every cell position holding `symbol`, in row-major order.
    ///
    /// Normally at most one position; alphabets with duplicate symbols can
    /// place the same symbol in several cells.
    pub fn cells_of(&self, symbol: char) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (i, row) in self.grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == symbol {
                    cells.push((i, j));
                }
            }
        }
        cells
    }

    /// The eight candidate digraphs for the cell at `(row, col)`.
    ///
    /// Each of the two row-key symbols is paired with each of the two
    /// column-key symbols, in both orders. The ordering is fixed (row symbol
    /// outer, column symbol inner, forward before reversed) so that the
    /// encoder's candidate list is deterministic before its keyed shuffle.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    pub fn candidates(&self, row: usize, col: usize) -> [Digraph; 8] {
        let [r0, r1] = self.row_keys[row];
        let [c0, c1] = self.col_keys[col];
        [
            [r0, c0],
            [c0, r0],
            [r0, c1],
            [c1, r0],
            [r1, c0],
            [c0, r1],
            [r1, c1],
            [c1, r1],
        ]
    }

    /// Count of unfilled trailing cells.
    pub fn empty_cells(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&c| c == EMPTY)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table {
            grid: vec![vec!['B', 'A'], vec!['C', EMPTY]],
            row_keys: vec![['p', 'q'], ['q', 'p']],
            col_keys: vec![['r', 's'], ['s', 'r']],
        }
    }

    #[test]
    fn test_dimensions() {
        let table = sample_table();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 2);
    }

    #[test]
    fn test_symbol_at_hides_sentinel() {
        let table = sample_table();
        assert_eq!(table.symbol_at(0, 0), Some('B'));
        assert_eq!(table.symbol_at(1, 1), None);
    }

    #[test]
    fn test_cells_of() {
        let table = sample_table();
        assert_eq!(table.cells_of('A'), vec![(0, 1)]);
        assert_eq!(table.cells_of('Z'), Vec::<(usize, usize)>::new());
    }

    #[test]
    fn test_candidates_pair_both_orders() {
        let table = sample_table();
        let combos = table.candidates(0, 0);
        assert_eq!(combos.len(), 8);

        // every pairing of a row symbol with a column symbol, both ways round
        for &[a, b] in &combos {
            let row_first = ['p', 'q'].contains(&a) && ['r', 's'].contains(&b);
            let col_first = ['r', 's'].contains(&a) && ['p', 'q'].contains(&b);
            assert!(row_first || col_first, "unexpected pairing {:?}", [a, b]);
        }
        assert!(combos.contains(&['p', 'r']));
        assert!(combos.contains(&['r', 'p']));
        assert!(combos.contains(&['q', 's']));
        assert!(combos.contains(&['s', 'q']));
    }

    #[test]
    fn test_empty_cells() {
        assert_eq!(sample_table().empty_cells(), 1);
    }
}
