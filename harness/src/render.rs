//! Plain-text board rendering.

use tileslide_kernel::board::Board;
use tileslide_search::search::Solution;

/// The board as rows of right-aligned cells, blank shown as a space.
#[must_use]
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// Every state of a solution, each preceded by a step header.
#[must_use]
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    for (i, state) in solution.path.iter().enumerate() {
        if i == 0 {
            out.push_str("start:\n");
        } else {
            let direction = solution
                .moves
                .get(i - 1)
                .map_or("?", |d| d.as_str());
            out.push_str(&format!("step {i} ({direction}):\n"));
        }
        out.push_str(&render_board(state));
        out.push_str("\n\n");
    }
    out
}
