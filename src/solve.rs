use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::grid::SymbolGrid;
use crate::observer;
use crate::pattern;
use crate::reconstruct;
use crate::rules;
use crate::wave::WaveGrid;

/// Knobs for a single solve: the pattern window size, the requested output
/// dimensions, and an optional PRNG seed for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub pattern_size: usize,
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
}

/// Runs the full pipeline: extract patterns from `example`, derive the
/// adjacency rules, collapse a wave sized to `cfg.width x cfg.height`, and
/// reconstruct the output symbol grid.
///
/// Fails with [`Error::InvalidInput`] if `cfg.pattern_size` is smaller than
/// 1, if `example` is smaller than the window, or if the requested output is
/// smaller than the window; fails with [`Error::Contradiction`] if
/// propagation empties some cell's possibility set before the wave fully
/// collapses.
pub fn solve(example: &SymbolGrid, cfg: Config) -> Result<SymbolGrid> {
    let n = cfg.pattern_size;
    if n < 1 {
        return Err(Error::InvalidInput(
            "pattern window size must be at least 1".to_string(),
        ));
    }
    if cfg.width < n || cfg.height < n {
        return Err(Error::InvalidInput(format!(
            "requested output {}x{} is smaller than the {n}x{n} window",
            cfg.width, cfg.height
        )));
    }

    let patterns = pattern::extract_patterns(example, n)?;
    let rules = rules::build_rules(&patterns, n);

    let wave_width = cfg.width - (n - 1);
    let wave_height = cfg.height - (n - 1);
    let mut wave = WaveGrid::new(wave_width, wave_height, patterns.len());

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    observer::run(&mut wave, &rules, &mut rng)?;

    reconstruct::reconstruct(&wave, &patterns, n, cfg.width, cfg.height)
}
