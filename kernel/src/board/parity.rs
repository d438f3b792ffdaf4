//! Reachability by permutation parity.
//!
//! Every slide is a transposition with the blank and moves the blank by one
//! row or column, so `permutation parity XOR blank (row + col) parity` is
//! invariant under slides. Two boards of the same side are in the same
//! connected component exactly when that invariant agrees.

use super::state::Board;

/// Parity (0 or 1) of the permutation the cells form, blank included.
#[must_use]
pub fn permutation_parity(board: &Board) -> usize {
    let cells = board.cells();
    let mut seen = vec![false; cells.len()];
    let mut transpositions = 0usize;
    for start in 0..cells.len() {
        if seen[start] {
            continue;
        }
        let mut cycle_len = 0usize;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            cycle_len += 1;
            // Valid boards are permutations of 0..len, so every value indexes a cell.
            i = usize::try_from(cells[i]).unwrap_or(start);
        }
        transpositions += cycle_len - 1;
    }
    transpositions % 2
}

/// The slide invariant of a board.
#[must_use]
pub fn slide_invariant(board: &Board) -> usize {
    let side = board.side();
    let blank = board.blank_index();
    (permutation_parity(board) + blank / side + blank % side) % 2
}

/// Whether `goal` can be reached from `initial` by some sequence of slides.
///
/// Boards of different sides are never mutually reachable.
#[must_use]
pub fn reachable(initial: &Board, goal: &Board) -> bool {
    initial.side() == goal.side() && slide_invariant(initial) == slide_invariant(goal)
}
