use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use itertools::iproduct;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::grid::{Symbol, SymbolGrid};

/// An NxN tile of symbols extracted from the example grid, plus how many
/// times it was observed directly (rotations don't inflate this count).
#[derive(Clone)]
pub struct Pattern {
    pub id: usize,
    pub size: usize,
    pub symbols: Vec<Symbol>,
    pub count: u32,
}

impl Pattern {
    /// A pattern discovered directly from a window in the example: counts
    /// this first sighting.
    fn observed(id: usize, size: usize, symbols: Vec<Symbol>) -> Self {
        Pattern {
            id,
            size,
            symbols,
            count: 1,
        }
    }

    /// A pattern discovered only as the rotation of an observed one: not
    /// itself a sighting, so it starts at zero until a later window matches
    /// it directly.
    fn generated(id: usize, size: usize, symbols: Vec<Symbol>) -> Self {
        Pattern {
            id,
            size,
            symbols,
            count: 0,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Symbol {
        self.symbols[row * self.size + col]
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern#{} (count {}) [", self.id, self.count)?;
        for row in 0..self.size {
            if row != 0 {
                write!(f, " / ")?;
            }
            for col in 0..self.size {
                write!(f, "{}", self.get(row, col))?;
                if col + 1 != self.size {
                    write!(f, ",")?;
                }
            }
        }
        write!(f, "]")
    }
}

/// The ordered, deduplicated sequence of patterns built by [`extract_patterns`].
///
/// Index positions are the canonical pattern IDs used by the rule table and
/// the wave grid everywhere else.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn get(&self, id: usize) -> &Pattern {
        &self.patterns[id]
    }
}

/// Extracts all distinct NxN patterns (plus their rotations) from `grid`.
///
/// Slides the window over every top-left position with no wrapping and no
/// reflection. A tile seen for the first time is appended together with its
/// three nontrivial 90-degree rotations (each only if not already present);
/// a tile seen again merely bumps the existing pattern's occurrence count.
pub fn extract_patterns(grid: &SymbolGrid, n: usize) -> Result<PatternTable> {
    if n < 1 {
        return Err(Error::InvalidInput(
            "pattern window size must be at least 1".to_string(),
        ));
    }
    if grid.rows() < n || grid.cols() < n {
        return Err(Error::InvalidInput(format!(
            "example grid {}x{} is smaller than the {n}x{n} window",
            grid.rows(),
            grid.cols()
        )));
    }

    let mut patterns: Vec<Pattern> = Vec::new();
    let mut index: FxHashMap<Vec<Symbol>, usize> = FxHashMap::default();

    for (i, j) in iproduct!(0..=(grid.rows() - n), 0..=(grid.cols() - n)) {
        let tile = extract_tile(grid, i, j, n)?;

        if let Some(&id) = index.get(&tile) {
            patterns[id].count += 1;
            continue;
        }

        let id = patterns.len();
        index.insert(tile.clone(), id);
        patterns.push(Pattern::observed(id, n, tile.clone()));

        let mut rotated = tile;
        for _ in 0..3 {
            rotated = rotate_cw(&rotated, n);
            if !index.contains_key(&rotated) {
                let rid = patterns.len();
                index.insert(rotated.clone(), rid);
                patterns.push(Pattern::generated(rid, n, rotated.clone()));
            }
        }
    }

    log::debug!(
        "extracted {} distinct patterns (window {n}x{n}) from a {}x{} example",
        patterns.len(),
        grid.rows(),
        grid.cols(),
    );

    Ok(PatternTable { patterns })
}

/// Reads the NxN tile whose top-left corner is at example row `i`, col `j`.
fn extract_tile(grid: &SymbolGrid, i: usize, j: usize, n: usize) -> Result<Vec<Symbol>> {
    let mut tile = Vec::with_capacity(n * n);
    for di in 0..n {
        for dj in 0..n {
            tile.push(grid.get(j + dj, i + di)?);
        }
    }
    Ok(tile)
}

/// Rotates an NxN row-major tile 90 degrees clockwise.
fn rotate_cw(tile: &[Symbol], n: usize) -> Vec<Symbol> {
    let mut out = vec![0; n * n];
    for row in 0..n {
        for col in 0..n {
            out[col * n + (n - 1 - row)] = tile[row * n + col];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn grid_from(rows: usize, cols: usize, symbols: Vec<Symbol>) -> SymbolGrid {
        SymbolGrid::new(rows, cols, symbols).unwrap()
    }

    #[test]
    fn rotate_cw_is_a_quarter_turn() {
        // [0, 1]
        // [2, 3]
        let tile = vec![0, 1, 2, 3];
        let rotated = rotate_cw(&tile, 2);
        // [2, 0]
        // [3, 1]
        assert_eq!(rotated, vec![2, 0, 3, 1]);

        let twice = rotate_cw(&rotated, 2);
        // [3, 2]
        // [1, 0]
        assert_eq!(twice, vec![3, 2, 1, 0]);

        let thrice = rotate_cw(&twice, 2);
        let full_circle = rotate_cw(&thrice, 2);
        assert_eq!(full_circle, tile);
    }

    #[test]
    fn single_symbol_grid_yields_one_pattern() {
        // All-zero 3x3 example, window 2.
        let grid = grid_from(3, 3, vec![0; 9]);
        let table = extract_patterns(&grid, 2).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).count, 4);
    }

    #[test]
    fn checkerboard_yields_two_patterns() {
        #[rustfmt::skip]
        let grid = grid_from(3, 3, vec![
            0, 1, 0,
            1, 0, 1,
            0, 1, 0,
        ]);
        let table = extract_patterns(&grid, 2).unwrap();
        // Every 2x2 window is one of the two checkerboard phases; the other
        // phase also turns up as that phase's own 90-degree rotation.
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|p| p.count >= 1));
    }

    #[test]
    fn pattern_count_accounts_for_every_window_before_rotation() {
        #[rustfmt::skip]
        let grid = grid_from(3, 3, vec![
            0, 0, 0,
            1, 1, 1,
            0, 0, 0,
        ]);
        let table = extract_patterns(&grid, 2).unwrap();
        // Every direct window increments exactly one pattern's count
        // (whether that pattern was itself the window's first sighting or
        // one merely discovered earlier as someone else's rotation); a
        // pattern only ever reached through rotation and never matched by a
        // later window stays at zero. So the counts must sum to exactly the
        // number of windows, not just bound it from below.
        let total: u32 = table.iter().map(|p| p.count).sum();
        let direct_windows = (grid.rows() - 1) * (grid.cols() - 1);
        assert_eq!(total, direct_windows as u32);
    }

    #[test]
    fn window_larger_than_grid_is_invalid_input() {
        let grid = grid_from(2, 2, vec![0, 0, 0, 0]);
        assert!(matches!(
            extract_patterns(&grid, 3),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_window_is_invalid_input() {
        let grid = grid_from(2, 2, vec![0, 0, 0, 0]);
        assert!(matches!(
            extract_patterns(&grid, 0),
            Err(Error::InvalidInput(_))
        ));
    }
}
