//! Legal blank slides.

use super::state::Board;

/// Direction the blank travels in a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by [`legal_moves`].
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Target cell when the blank at `blank` moves this way, if on the board.
    #[must_use]
    pub fn target(self, blank: usize, side: usize) -> Option<usize> {
        let row = blank / side;
        let col = blank % side;
        match self {
            Self::Up if row > 0 => Some(blank - side),
            Self::Down if row + 1 < side => Some(blank + side),
            Self::Left if col > 0 => Some(blank - 1),
            Self::Right if col + 1 < side => Some(blank + 1),
            _ => None,
        }
    }

    /// The slide that undoes this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Direction of a slide that moves the blank from `from` to `to`.
    ///
    /// Returns `None` when the two cells are not orthogonally adjacent.
    #[must_use]
    pub fn between(from: usize, to: usize, side: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.target(from, side) == Some(to))
    }

    /// Lowercase name, used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cells the blank at `blank_index` can swap with, in up/down/left/right order.
#[must_use]
pub fn legal_moves(blank_index: usize, side: usize) -> Vec<usize> {
    legal_slides(blank_index, side)
        .into_iter()
        .map(|(_, target)| target)
        .collect()
}

/// Like [`legal_moves`], with each target labelled by its direction.
#[must_use]
pub fn legal_slides(blank_index: usize, side: usize) -> Vec<(Direction, usize)> {
    Direction::ALL
        .into_iter()
        .filter_map(|d| d.target(blank_index, side).map(|t| (d, t)))
        .collect()
}

/// Slide the blank of `state` from `blank_index` into `target_index`.
///
/// Pure: `state` is copied, never mutated.
#[must_use]
pub fn apply_move(state: &Board, blank_index: usize, target_index: usize) -> Board {
    state.apply_move(blank_index, target_index)
}
