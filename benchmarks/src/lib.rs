//! Shared helpers for tileslide benchmark suites.

use tileslide_kernel::board::{legal_moves, Board};

/// A named benchmark instance.
pub struct Regime {
    pub name: &'static str,
    pub initial: Board,
    pub goal: Board,
}

/// Deterministic scramble: `steps` blank slides away from the solved board.
///
/// Never undoes the previous slide. The choice among the remaining moves
/// follows a fixed LCG so every run builds the same board.
///
/// # Errors
///
/// Returns the kernel's error if `side` is below the minimum.
pub fn scrambled(side: usize, steps: usize) -> Result<Board, tileslide_kernel::error::BoardError> {
    let mut board = Board::solved(side)?;
    let mut previous_blank = None;
    let mut seed: u64 = 0x5eed;
    for _ in 0..steps {
        let blank = board.blank_index();
        let options: Vec<usize> = legal_moves(blank, side)
            .into_iter()
            .filter(|t| Some(*t) != previous_blank)
            .collect();
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let pick = usize::try_from((seed >> 33) % options.len() as u64).unwrap_or(0);
        board = board.apply_move(blank, options[pick]);
        previous_blank = Some(blank);
    }
    Ok(board)
}

/// Instances of increasing depth on 3x3 and 4x4 boards.
///
/// # Errors
///
/// Propagates board construction errors.
pub fn regimes() -> Result<Vec<Regime>, tileslide_kernel::error::BoardError> {
    let mut out = Vec::new();
    for (name, side, steps) in [
        ("3x3_depth_8", 3, 8),
        ("3x3_depth_20", 3, 20),
        ("4x4_depth_12", 4, 12),
        ("4x4_depth_22", 4, 22),
    ] {
        out.push(Regime {
            name,
            initial: scrambled(side, steps)?,
            goal: Board::solved(side)?,
        });
    }
    Ok(out)
}
