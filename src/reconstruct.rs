use crate::error::Result;
use crate::grid::{Symbol, SymbolGrid};
use crate::pattern::PatternTable;
use crate::wave::WaveGrid;

/// Rebuilds the `output_width x output_height` symbol grid from a fully
/// collapsed wave.
///
/// Neighbouring wave cells' patterns agree on their overlap by construction
/// (the rule invariant), so only each cell's non-overlapping slice needs
/// writing: interior cells write a single symbol, the last column/row write
/// a strip, and the bottom-right cell writes its whole pattern.
pub fn reconstruct(
    wave: &WaveGrid,
    patterns: &PatternTable,
    n: usize,
    output_width: usize,
    output_height: usize,
) -> Result<SymbolGrid> {
    let w = wave.width();
    let h = wave.height();
    let mut out = vec![0 as Symbol; output_width * output_height];

    let mut write = |px: usize, py: usize, value: Symbol| {
        out[py * output_width + px] = value;
    };

    for idx in 0..wave.len() {
        let (x, y) = wave.pos(idx);
        let pattern = patterns.get(wave.cell(idx).collapsed_id);

        let last_col = x == w - 1;
        let last_row = y == h - 1;

        if last_col && last_row {
            for a in 0..n {
                for b in 0..n {
                    write(x + a, y + b, pattern.get(b, a));
                }
            }
        } else if last_col {
            for k in 0..n {
                write(x + k, y, pattern.get(0, k));
            }
        } else if last_row {
            for k in 0..n {
                write(x, y + k, pattern.get(k, 0));
            }
        } else {
            write(x, y, pattern.get(0, 0));
        }
    }

    SymbolGrid::new(output_height, output_width, out)
}
