//! Remaining-distance estimates.

use crate::board::{Board, BLANK};

/// Estimates how many slides separate a state from the goal.
///
/// Implementations must be pure: same `(state, goal)` → same estimate.
/// An estimate of `0` means the state *is* the goal; the search driver uses
/// that as its goal test.
pub trait Heuristic: Send + Sync {
    /// Estimate the remaining distance from `state` to `goal`.
    fn estimate(&self, state: &Board, goal: &Board) -> u32;

    /// Stable identifier recorded in search metadata.
    fn name(&self) -> &'static str;
}

/// Number of non-blank tiles not on their goal cell.
///
/// Admissible: a slide relocates one tile, so it fixes at most one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedTiles;

impl Heuristic for MisplacedTiles {
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        misplaced_tiles(state, goal)
    }

    fn name(&self) -> &'static str {
        "misplaced_tiles"
    }
}

/// Count positions `i` where `state[i]` is a tile and differs from `goal[i]`.
#[must_use]
pub fn misplaced_tiles(state: &Board, goal: &Board) -> u32 {
    state
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(s, g)| **s != BLANK && s != g)
        .fold(0, |count, _| count + 1)
}
