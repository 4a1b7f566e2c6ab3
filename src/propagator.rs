use std::collections::VecDeque;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::rules::RuleTable;
use crate::wave::WaveGrid;

/// Drives `wave` to arc-consistency starting from the cell at `seed`, which
/// must already be dirty (just `force`d or `ban`ned).
///
/// Pops dirty cells off a FIFO queue (order doesn't affect the fixed point:
/// propagation is confluent), clears each one's dirty flag, and for each of
/// the four fixed directions in turn bans every neighbour pattern the popped
/// cell's remaining possibilities don't allow. A neighbour's dirty flag does
/// double duty as its queued-membership marker, so a cell already queued is
/// never enqueued twice. A neighbour driven to zero possibilities is a
/// contradiction and aborts the whole solve.
pub fn propagate(wave: &mut WaveGrid, rules: &RuleTable, seed: usize) -> Result<()> {
    let mut queue = VecDeque::with_capacity(wave.len());
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        wave.clear_dirty(current);

        for &direction in Direction::ORDER.iter() {
            let Some(neighbor) = wave.neighbor(current, direction) else {
                continue;
            };

            let allowed = rules.allowed_union(&wave.cell(current).possible, direction);
            let banned: Vec<usize> = wave.cell(neighbor)
                .possible
                .iter_ones()
                .filter(|&q| !allowed[q])
                .collect();

            if banned.is_empty() {
                continue;
            }

            let already_queued = wave.is_dirty(neighbor);

            for pattern in banned {
                if wave.ban(neighbor, pattern) == 0 {
                    let (x, y) = wave.pos(neighbor);
                    log::warn!("contradiction reached at output cell ({x}, {y})");
                    return Err(Error::Contradiction { x, y });
                }
            }

            if !already_queued {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(())
}
