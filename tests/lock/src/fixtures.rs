//! Fixed puzzle instances with known outcomes.
//!
//! Counts below are for the misplaced-tiles heuristic and are locked: a
//! change in any of them means the search order changed.

use tileslide_search::policy::{ReinsertionPolicy, SearchPolicy};

pub const GOAL_3: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// One slide of the blank to the right.
pub const ONE_SLIDE: [u32; 9] = [1, 2, 3, 4, 5, 6, 7, 0, 8];

/// Four slides from the top-left corner; solved under both policies.
pub const FOUR_SLIDES: [u32; 9] = [0, 1, 3, 4, 2, 5, 7, 8, 6];

/// Reachable, but the best-child-only policy discards the only continuation.
pub const RESTRICTED_DEAD_END: [u32; 9] = [2, 3, 5, 1, 0, 4, 7, 8, 6];

/// Two tiles swapped: odd parity, never reachable.
pub const SWAPPED_PAIR: [u32; 9] = [2, 1, 3, 4, 5, 6, 7, 8, 0];

pub const GOAL_2: [u32; 4] = [1, 2, 3, 0];

/// Unreachable 2x2 instance; the whole parity class is 12 states.
pub const UNREACHABLE_2: [u32; 4] = [2, 1, 3, 0];

/// A named instance with its locked outcome.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub initial: &'static [u32],
    pub goal: &'static [u32],
    pub reinsertion: ReinsertionPolicy,
    /// `Some(moves)` when solved, `None` when exhausted.
    pub solution_len: Option<u32>,
    pub total_expansions: u64,
    pub total_nodes: u64,
}

impl Fixture {
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            reinsertion: self.reinsertion,
        }
    }
}

/// Every locked instance, in a fixed order.
pub const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "one_slide",
        initial: &ONE_SLIDE,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: Some(1),
        total_expansions: 1,
        total_nodes: 4,
    },
    Fixture {
        name: "at_goal",
        initial: &GOAL_3,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: Some(0),
        total_expansions: 0,
        total_nodes: 1,
    },
    Fixture {
        name: "four_slides",
        initial: &FOUR_SLIDES,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: Some(4),
        total_expansions: 4,
        total_nodes: 10,
    },
    Fixture {
        name: "four_slides_all_children",
        initial: &FOUR_SLIDES,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::AllChildren,
        solution_len: Some(4),
        total_expansions: 4,
        total_nodes: 10,
    },
    Fixture {
        name: "restricted_dead_end",
        initial: &RESTRICTED_DEAD_END,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: None,
        total_expansions: 15,
        total_nodes: 31,
    },
    Fixture {
        name: "restricted_dead_end_all_children",
        initial: &RESTRICTED_DEAD_END,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::AllChildren,
        solution_len: Some(8),
        total_expansions: 17,
        total_nodes: 33,
    },
    Fixture {
        name: "swapped_pair",
        initial: &SWAPPED_PAIR,
        goal: &GOAL_3,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: None,
        total_expansions: 425,
        total_nodes: 696,
    },
    Fixture {
        name: "unreachable_2x2",
        initial: &UNREACHABLE_2,
        goal: &GOAL_2,
        reinsertion: ReinsertionPolicy::BestChildOnly,
        solution_len: None,
        total_expansions: 11,
        total_nodes: 12,
    },
    Fixture {
        name: "unreachable_2x2_all_children",
        initial: &UNREACHABLE_2,
        goal: &GOAL_2,
        reinsertion: ReinsertionPolicy::AllChildren,
        solution_len: None,
        total_expansions: 12,
        total_nodes: 12,
    },
];
