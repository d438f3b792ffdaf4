//! Properties of reconstructed paths and of the board model they walk.

use lock_tests::fixtures::FIXTURES;
use tileslide_kernel::board::{apply_move, legal_moves, reachable, Board, Direction};
use tileslide_kernel::heuristic::misplaced_tiles;
use tileslide_search::path::reconstruct_ids;
use tileslide_search::search::solve;

/// Cells where `a` and `b` differ.
fn diff_positions(a: &Board, b: &Board) -> Vec<usize> {
    a.cells()
        .iter()
        .zip(b.cells())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

/// ACCEPTANCE: PATH-ADJACENCY
#[test]
fn consecutive_path_states_differ_by_one_blank_slide() {
    for fixture in FIXTURES {
        let result = solve(fixture.initial, fixture.goal, &fixture.policy()).unwrap();
        let Some(solution) = result.outcome.solution() else {
            continue;
        };
        assert_eq!(solution.path.first().unwrap().cells(), fixture.initial);
        assert_eq!(solution.path.last().unwrap().cells(), fixture.goal);
        assert_eq!(solution.moves.len(), solution.path.len() - 1);

        for (pair, direction) in solution.path.windows(2).zip(&solution.moves) {
            let (from, to) = (&pair[0], &pair[1]);
            let diff = diff_positions(from, to);
            assert_eq!(diff.len(), 2, "{}: not a single swap", fixture.name);
            assert!(diff.contains(&from.blank_index()));
            assert!(diff.contains(&to.blank_index()));
            assert_eq!(
                Direction::between(from.blank_index(), to.blank_index(), from.side()),
                Some(*direction)
            );
        }
    }
}

/// ACCEPTANCE: PATH-COSTS
#[test]
fn path_costs_increase_by_one_per_step() {
    for fixture in FIXTURES {
        let result = solve(fixture.initial, fixture.goal, &fixture.policy()).unwrap();
        let Some(solution) = result.outcome.solution() else {
            continue;
        };
        let ids = reconstruct_ids(&result.nodes, solution.goal_node);
        assert_eq!(ids.first(), Some(&0), "{}: path starts at the root", fixture.name);
        for (step, id) in ids.iter().enumerate() {
            let node = &result.nodes[*id];
            assert_eq!(node.g_cost() as usize, step);
            assert_eq!(node.state(), &solution.path[step]);
        }
        assert_eq!(solution.g_cost as usize, ids.len() - 1);
    }
}

/// ACCEPTANCE: MOVE-INVOLUTION
#[test]
fn every_legal_move_is_undone_by_its_inverse() {
    for fixture in FIXTURES {
        let board = Board::new(fixture.initial.to_vec()).unwrap();
        let blank = board.blank_index();
        for target in legal_moves(blank, board.side()) {
            let moved = apply_move(&board, blank, target);
            assert_eq!(moved.blank_index(), target);
            assert!(reachable(&board, &moved));
            let back = apply_move(&moved, target, blank);
            assert_eq!(back, board);
        }
    }
}

/// ACCEPTANCE: HEURISTIC-BOUNDS
#[test]
fn misplaced_tiles_is_zero_only_at_goal_and_bounded() {
    for fixture in FIXTURES {
        let initial = Board::new(fixture.initial.to_vec()).unwrap();
        let goal = Board::new(fixture.goal.to_vec()).unwrap();
        let h = misplaced_tiles(&initial, &goal);
        assert!(h as usize <= initial.len() - 1);
        assert_eq!(h == 0, initial == goal, "{}", fixture.name);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
    }
}
