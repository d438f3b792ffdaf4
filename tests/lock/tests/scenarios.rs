//! Reference scenarios: trivial solve, corner moves, malformed input, and
//! the restricted policy exhausting on a reachable goal.

use lock_tests::fixtures::{FOUR_SLIDES, GOAL_3, ONE_SLIDE, RESTRICTED_DEAD_END};
use tileslide_kernel::board::{legal_slides, reachable, Board, Direction};
use tileslide_kernel::error::BoardError;
use tileslide_search::error::SearchError;
use tileslide_search::graph::{CandidateOutcome, TerminationReason};
use tileslide_search::policy::SearchPolicy;
use tileslide_search::search::{solve, SearchOutcome};

fn board(cells: &[u32]) -> Board {
    Board::new(cells.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-1 trivial solve
// ---------------------------------------------------------------------------

#[test]
fn trivial_instance_is_one_right_slide() {
    let result = solve(&ONE_SLIDE, &GOAL_3, &SearchPolicy::default()).unwrap();
    let solution = result.outcome.solution().expect("solved");
    assert_eq!(solution.path.len(), 2);
    assert_eq!(solution.moves, vec![Direction::Right]);
    assert_eq!(solution.h_cost, 0);
    assert_eq!(solution.path[0], board(&ONE_SLIDE));
    assert_eq!(solution.path[1], board(&GOAL_3));
}

#[test]
fn four_slide_instance_follows_the_expected_path() {
    let result = solve(&FOUR_SLIDES, &GOAL_3, &SearchPolicy::default()).unwrap();
    let solution = result.outcome.solution().unwrap();
    assert_eq!(
        solution.moves,
        vec![Direction::Right, Direction::Down, Direction::Right, Direction::Down]
    );
    let keys: Vec<String> = solution.path.iter().map(Board::canonical_key).collect();
    assert_eq!(
        keys,
        vec![
            "0,1,3,4,2,5,7,8,6",
            "1,0,3,4,2,5,7,8,6",
            "1,2,3,4,0,5,7,8,6",
            "1,2,3,4,5,0,7,8,6",
            "1,2,3,4,5,6,7,8,0",
        ]
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-2 corner blank has two legal moves
// ---------------------------------------------------------------------------

#[test]
fn corner_blank_moves_only_down_and_right() {
    let slides = legal_slides(0, 3);
    assert_eq!(slides, vec![(Direction::Down, 3), (Direction::Right, 1)]);
}

#[test]
fn corner_expansion_records_exactly_two_candidates() {
    let result = solve(&FOUR_SLIDES, &GOAL_3, &SearchPolicy::default()).unwrap();
    let root = &result.graph.expansions[0];
    let directions: Vec<Direction> = root.candidates.iter().map(|c| c.direction).collect();
    assert_eq!(directions, vec![Direction::Down, Direction::Right]);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-3 malformed input
// ---------------------------------------------------------------------------

#[test]
fn eight_values_for_side_three_is_invalid_dimension() {
    let err = Board::with_side(3, vec![1, 2, 3, 4, 5, 6, 7, 0]).unwrap_err();
    assert_eq!(
        err,
        BoardError::InvalidDimension {
            len: 8,
            side: Some(3)
        }
    );

    let err = solve(&[1, 2, 3, 4, 5, 6, 7, 0], &GOAL_3, &SearchPolicy::default()).unwrap_err();
    assert!(matches!(
        err,
        SearchError::Board(BoardError::InvalidDimension { len: 8, .. })
    ));
}

#[test]
fn duplicate_and_missing_blank_are_malformed() {
    assert!(matches!(
        Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 8]),
        Err(BoardError::MalformedState { .. })
    ));
    assert!(matches!(
        Board::new(vec![0, 2, 3, 4, 5, 6, 7, 8, 0]),
        Err(BoardError::MalformedState { .. })
    ));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SCENARIO-4 restricted policy is incomplete
// ---------------------------------------------------------------------------

#[test]
fn restricted_policy_exhausts_although_goal_is_reachable() {
    assert!(reachable(&board(&RESTRICTED_DEAD_END), &board(&GOAL_3)));

    let result = solve(&RESTRICTED_DEAD_END, &GOAL_3, &SearchPolicy::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::FrontierExhausted
    );

    // Something was thrown away along the way.
    assert!(result.graph.metadata.total_discarded > 0);
    let discarded: usize = result.graph.expansions.iter().map(|e| e.discarded().len()).sum();
    assert_eq!(discarded as u64, result.graph.metadata.total_discarded);
}

#[test]
fn all_children_policy_solves_the_same_instance() {
    let result = solve(&RESTRICTED_DEAD_END, &GOAL_3, &SearchPolicy::all_children()).unwrap();
    let solution = result.outcome.solution().expect("full best-first is complete");
    assert_eq!(solution.g_cost, 8);
    for event in &result.graph.expansions {
        assert!(event.discarded().is_empty());
    }
}

#[test]
fn every_reinserted_child_was_generated_by_that_expansion() {
    let result = solve(&RESTRICTED_DEAD_END, &GOAL_3, &SearchPolicy::default()).unwrap();
    for event in &result.graph.expansions {
        for id in &event.reinserted {
            assert!(event.candidates.iter().any(|c| matches!(
                c.outcome,
                CandidateOutcome::Generated { node_id, .. } if node_id == *id
            )));
        }
    }
}
