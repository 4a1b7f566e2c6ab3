use crate::error::{Error, Result};
use crate::table::Table;

/// An opaque, fixed-width discrete value of a cell. Equality is bitwise.
///
/// In the image front end this packs an `Rgb<u8>` pixel; the core never
/// interprets the bits, only compares them.
pub type Symbol = u32;

/// A row-major rectangular array of [`Symbol`]s.
///
/// Used both for the example grid fed into [`crate::pattern::extract_patterns`]
/// and for the grid [`crate::reconstruct::reconstruct`] produces.
#[derive(Debug, Clone)]
pub struct SymbolGrid {
    table: Table<Symbol>,
}

impl SymbolGrid {
    /// Builds a grid from a row-major `symbols` buffer of length `rows * cols`.
    pub fn new(rows: usize, cols: usize, symbols: Vec<Symbol>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput(
                "grid dimensions must be nonzero".to_string(),
            ));
        }
        if symbols.len() != rows * cols {
            return Err(Error::InvalidInput(format!(
                "expected {} symbols for a {rows}x{cols} grid, got {}",
                rows * cols,
                symbols.len()
            )));
        }
        Ok(SymbolGrid {
            table: Table::new(symbols, cols),
        })
    }

    pub fn rows(&self) -> usize {
        self.table.height()
    }

    pub fn cols(&self) -> usize {
        self.table.width()
    }

    /// Bounds-checked read. Out-of-bounds access is `InvalidInput`, never a panic.
    pub fn get(&self, x: usize, y: usize) -> Result<Symbol> {
        if x >= self.cols() || y >= self.rows() {
            return Err(Error::InvalidInput(format!(
                "cell ({x}, {y}) out of bounds for a {}x{} grid",
                self.rows(),
                self.cols()
            )));
        }
        Ok(self.table[(x, y)])
    }

    /// The full row-major symbol buffer.
    pub fn symbols(&self) -> &[Symbol] {
        self.table.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn get_reads_row_major() {
        let grid = SymbolGrid::new(2, 3, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 0);
        assert_eq!(grid.get(2, 0).unwrap(), 2);
        assert_eq!(grid.get(0, 1).unwrap(), 3);
        assert_eq!(grid.get(2, 1).unwrap(), 5);
    }

    #[test]
    fn get_out_of_bounds_is_invalid_input() {
        let grid = SymbolGrid::new(2, 2, vec![0, 0, 0, 0]).unwrap();
        assert_eq!(
            grid.get(2, 0).unwrap_err(),
            Error::InvalidInput(
                "cell (2, 0) out of bounds for a 2x2 grid".to_string()
            )
        );
    }

    #[test]
    fn mismatched_len_is_invalid_input() {
        assert!(SymbolGrid::new(2, 2, vec![0, 0, 0]).is_err());
    }
}
