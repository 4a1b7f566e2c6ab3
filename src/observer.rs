use rand::Rng;

use crate::error::Result;
use crate::propagator::propagate;
use crate::rules::RuleTable;
use crate::wave::WaveGrid;

/// Drives the full collapse loop: seed a random cell and pattern, propagate,
/// then repeatedly collapse the first still-undecided cell until none remain
/// or the propagator reports a contradiction.
pub fn run<R: Rng + ?Sized>(wave: &mut WaveGrid, rules: &RuleTable, rng: &mut R) -> Result<()> {
    let seed = rng.gen_range(0..wave.len());
    let pattern = rng.gen_range(0..wave.n_patterns());
    wave.force(seed, pattern);
    propagate(wave, rules, seed)?;

    let mut collapses = 1u64;
    while let Some(idx) = next_uncollapsed(wave) {
        let pattern = wave
            .cell(idx)
            .possible
            .iter_ones()
            .next()
            .expect("a cell with remaining > 1 has at least one possible pattern");
        wave.force(idx, pattern);
        log::trace!("collapsed cell {idx} to pattern {pattern}");
        propagate(wave, rules, idx)?;
        collapses += 1;
    }

    log::info!("wave fully collapsed after {collapses} collapses");
    Ok(())
}

/// Linear scan for the first cell with more than one possibility left.
fn next_uncollapsed(wave: &WaveGrid) -> Option<usize> {
    (0..wave.len()).find(|&idx| wave.cell(idx).remaining > 1)
}
