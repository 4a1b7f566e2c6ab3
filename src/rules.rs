use bitvec::prelude::*;

use crate::direction::Direction;
use crate::grid::Symbol;
use crate::pattern::PatternTable;

/// For every `(pattern_id, direction)` the dense bitset of pattern IDs
/// permitted to occupy that neighbour slot.
///
/// Built once from a [`PatternTable`] and immutable thereafter. Invariant:
/// `b` is in `allowed(a, Up)` iff `a` is in `allowed(b, Down)`, likewise for
/// Left/Right.
#[derive(Debug, Clone)]
pub struct RuleTable {
    allowed: Vec<[BitVec; 4]>,
    n_patterns: usize,
}

impl RuleTable {
    pub fn n_patterns(&self) -> usize {
        self.n_patterns
    }

    /// The set of pattern IDs allowed at the `d`-neighbour of `pattern`.
    pub fn allowed(&self, pattern: usize, d: Direction) -> &BitVec {
        &self.allowed[pattern][d.index()]
    }

    /// Union, over every pattern id set in `possible`, of `allowed(id, d)`.
    pub fn allowed_union(&self, possible: &BitSlice, d: Direction) -> BitVec {
        let mut union = bitvec![0; self.n_patterns];
        for p in possible.iter_ones() {
            union |= self.allowed(p, d);
        }
        union
    }
}

/// Builds the rule table: for every ordered pair of patterns and each
/// direction, records the adjacency iff their overlap matches elementwise.
pub fn build_rules(patterns: &PatternTable, n: usize) -> RuleTable {
    let count = patterns.len();
    let mut allowed: Vec<[BitVec; 4]> = (0..count)
        .map(|_| {
            [
                bitvec![0; count],
                bitvec![0; count],
                bitvec![0; count],
                bitvec![0; count],
            ]
        })
        .collect();

    for a in patterns.iter() {
        for b in patterns.iter() {
            if vertical_match(&a.symbols, &b.symbols, n) {
                allowed[a.id][Direction::Down.index()].set(b.id, true);
                allowed[b.id][Direction::Up.index()].set(a.id, true);
            }
            if horizontal_match(&a.symbols, &b.symbols, n) {
                allowed[a.id][Direction::Right.index()].set(b.id, true);
                allowed[b.id][Direction::Left.index()].set(a.id, true);
            }
        }
    }

    log::debug!(
        "built rule table over {count} patterns ({} bitsets)",
        count * 4
    );

    RuleTable {
        allowed,
        n_patterns: count,
    }
}

/// Holds iff placing `bottom` directly under `top` agrees on their overlap:
/// `bottom[k] == top[k + n]` for every `k` in `[0, n*(n-1))`.
fn vertical_match(top: &[Symbol], bottom: &[Symbol], n: usize) -> bool {
    (0..n * (n - 1)).all(|k| bottom[k] == top[k + n])
}

/// Holds iff placing `right` directly to the right of `left` agrees on their
/// overlap: `right[k] == left[k + 1]` for every `k` in `[0, n*n)` whose
/// column (`k mod n`) isn't the last one.
fn horizontal_match(left: &[Symbol], right: &[Symbol], n: usize) -> bool {
    (0..n * n)
        .filter(|k| k % n != n - 1)
        .all(|k| right[k] == left[k + 1])
}
