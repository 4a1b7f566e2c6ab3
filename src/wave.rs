use bitvec::prelude::*;

use crate::direction::Direction;
use crate::table::Table;

/// Sentinel stored in `collapsed_id` before a cell has collapsed.
pub const UNKNOWN: usize = usize::MAX;

/// One output cell's superposition: which pattern IDs are still possible.
#[derive(Debug, Clone)]
pub struct WaveCell {
    pub possible: BitVec,
    pub remaining: usize,
    /// Set by `ban`/`force` when the cell's possibilities change, cleared by
    /// [`WaveGrid::clear_dirty`] once the propagator has processed it. Doubles
    /// as the propagator's queued-membership flag: a cell already dirty never
    /// needs to be queued twice.
    pub dirty: bool,
    pub collapsed_id: usize,
}

impl WaveCell {
    fn new(n_patterns: usize) -> Self {
        WaveCell {
            possible: bitvec![1; n_patterns],
            remaining: n_patterns,
            dirty: false,
            collapsed_id: UNKNOWN,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed_id != UNKNOWN
    }
}

/// The `W x H` grid of [`WaveCell`]s the observer and propagator operate on.
#[derive(Debug)]
pub struct WaveGrid {
    cells: Table<WaveCell>,
    n_patterns: usize,
}

impl WaveGrid {
    /// Every pattern possible in every cell: the initial state of a solve.
    pub fn new(width: usize, height: usize, n_patterns: usize) -> Self {
        let cells: Vec<WaveCell> = (0..width * height)
            .map(|_| WaveCell::new(n_patterns))
            .collect();
        WaveGrid {
            cells: Table::new(cells, width),
            n_patterns,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, idx: usize) -> &WaveCell {
        &self.cells[idx]
    }

    pub fn pos(&self, idx: usize) -> (usize, usize) {
        self.cells.idx_to_pos(idx)
    }

    pub fn neighbor(&self, idx: usize, d: Direction) -> Option<usize> {
        self.cells.neighbor(idx, d)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WaveCell> {
        self.cells.iter()
    }

    /// Clears bit `pid` in `cell`'s possibility set. Returns the cell's
    /// `remaining` count after banning, so the caller can detect a
    /// contradiction (`remaining == 0`) and raise it with coordinates.
    pub fn ban(&mut self, idx: usize, pid: usize) -> usize {
        let cell = &mut self.cells[idx];
        if cell.possible[pid] {
            cell.possible.set(pid, false);
            cell.remaining -= 1;
            cell.dirty = true;
            if cell.remaining == 1 {
                cell.collapsed_id = cell.possible.iter_ones().next().unwrap_or(UNKNOWN);
            }
        }
        cell.remaining
    }

    /// Collapses `cell` to exactly `pid`.
    pub fn force(&mut self, idx: usize, pid: usize) {
        let cell = &mut self.cells[idx];
        cell.possible.fill(false);
        cell.possible.set(pid, true);
        cell.remaining = 1;
        cell.collapsed_id = pid;
        cell.dirty = true;
    }

    pub fn is_dirty(&self, idx: usize) -> bool {
        self.cells[idx].dirty
    }

    /// Marks `idx` as processed: the propagator calls this right after
    /// popping a cell off its work queue, before reading its possibilities.
    pub fn clear_dirty(&mut self, idx: usize) {
        self.cells[idx].dirty = false;
    }

    pub fn n_patterns(&self) -> usize {
        self.n_patterns
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn init_is_all_possible() {
        let wave = WaveGrid::new(2, 2, 3);
        for cell in wave.iter() {
            assert_eq!(cell.remaining, 3);
            assert!(!cell.is_collapsed());
            assert!(!cell.dirty);
        }
    }

    #[test]
    fn ban_strictly_decreases_remaining_and_sets_dirty() {
        let mut wave = WaveGrid::new(1, 1, 3);
        let before = wave.cell(0).remaining;
        let after = wave.ban(0, 0);
        assert!(after < before);
        assert!(wave.cell(0).dirty);
    }

    #[test]
    fn ban_to_one_sets_collapsed_id() {
        let mut wave = WaveGrid::new(1, 1, 2);
        wave.ban(0, 0);
        assert_eq!(wave.cell(0).remaining, 1);
        assert_eq!(wave.cell(0).collapsed_id, 1);
    }

    #[test]
    fn ban_to_zero_reports_contradiction() {
        let mut wave = WaveGrid::new(1, 1, 1);
        let remaining = wave.ban(0, 0);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn force_collapses_to_a_single_pattern() {
        let mut wave = WaveGrid::new(1, 1, 4);
        wave.force(0, 2);
        assert_eq!(wave.cell(0).remaining, 1);
        assert_eq!(wave.cell(0).collapsed_id, 2);
        assert!(wave.cell(0).possible[2]);
        assert!(!wave.cell(0).possible[0]);
    }

    #[test]
    fn clear_dirty_resets_the_flag() {
        let mut wave = WaveGrid::new(1, 1, 2);
        wave.ban(0, 0);
        assert!(wave.is_dirty(0));
        wave.clear_dirty(0);
        assert!(!wave.is_dirty(0));
    }
}
