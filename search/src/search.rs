//! Search entry point and expansion loop.
//!
//! # Phases
//!
//! ```text
//! Ready --step--> Running --step*--> Solved | Exhausted
//! ```
//!
//! The first [`SearchDriver::step`] seeds the frontier with the root. Every
//! later step pops one node, goal-tests it (`h == 0`), and otherwise expands
//! it. Which children go back on the frontier is decided by
//! [`ReinsertionPolicy`].

use log::{debug, info};

use tileslide_kernel::board::{legal_slides, Board, Direction};
use tileslide_kernel::heuristic::{Heuristic, MisplacedTiles};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, NodeSummary, SearchGraph,
    SearchGraphMetadata, TerminationReason,
};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::observer::{NoopObserver, SearchObserver};
use crate::path::{move_sequence, reconstruct_path};
use crate::policy::{ReinsertionPolicy, SearchPolicy};
use crate::visited::VisitedSet;

/// Driver state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Constructed, frontier not yet seeded.
    Ready,
    /// Frontier seeded; iterating.
    Running,
    /// A node with `h == 0` was popped.
    Solved { node_id: NodeId },
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl DriverPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Exhausted)
    }
}

/// A found solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// States from initial to goal, inclusive.
    pub path: Vec<Board>,
    /// Blank direction of each slide (`path.len() - 1` entries).
    pub moves: Vec<Direction>,
    /// Accumulated slide count of the goal node.
    pub g_cost: u32,
    /// Heuristic of the goal node; always `0`.
    pub h_cost: u32,
    pub goal_node: NodeId,
}

/// How a run ended.
///
/// `Exhausted` is an ordinary result, not an error: under
/// [`ReinsertionPolicy::BestChildOnly`] it can happen even when the goal is
/// reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    Exhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(s) => Some(s),
            Self::Exhausted => None,
        }
    }
}

/// Result of a search execution.
///
/// Always carries the full audit graph and the node arena, whatever the
/// outcome.
#[derive(Debug)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub graph: SearchGraph,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: NodeArena,
}

impl SearchResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}

/// Step-wise search driver.
pub struct SearchDriver<'a> {
    initial: Board,
    goal: Board,
    policy: SearchPolicy,
    heuristic: &'a dyn Heuristic,
    observer: &'a mut dyn SearchObserver,
    phase: DriverPhase,
    arena: NodeArena,
    frontier: Frontier,
    visited: VisitedSet,
    expansions: Vec<ExpandEvent>,
    total_duplicates_suppressed: u64,
    total_discarded: u64,
}

impl<'a> SearchDriver<'a> {
    /// Create a driver in [`DriverPhase::Ready`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SideMismatch`] if the boards differ in side.
    pub fn new(
        initial: Board,
        goal: Board,
        policy: &SearchPolicy,
        heuristic: &'a dyn Heuristic,
        observer: &'a mut dyn SearchObserver,
    ) -> Result<Self, SearchError> {
        if initial.side() != goal.side() {
            return Err(SearchError::SideMismatch {
                initial: initial.side(),
                goal: goal.side(),
            });
        }
        Ok(Self {
            initial,
            goal,
            policy: *policy,
            heuristic,
            observer,
            phase: DriverPhase::Ready,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            expansions: Vec::new(),
            total_duplicates_suppressed: 0,
            total_discarded: 0,
        })
    }

    #[must_use]
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Nodes created so far.
    #[must_use]
    pub fn nodes(&self) -> &NodeArena {
        &self.arena
    }

    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[must_use]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Advance by one iteration and return the new phase.
    ///
    /// Terminal phases are sticky: stepping a finished driver is a no-op.
    pub fn step(&mut self) -> DriverPhase {
        match self.phase {
            DriverPhase::Ready => self.seed(),
            DriverPhase::Running => self.iterate(),
            DriverPhase::Solved { .. } | DriverPhase::Exhausted => {}
        }
        self.phase
    }

    /// Step until a terminal phase and assemble the result.
    #[must_use]
    pub fn run(mut self) -> SearchResult {
        while !self.phase.is_terminal() {
            self.step();
        }
        self.finish()
    }

    fn seed(&mut self) {
        info!(
            "search start: side={} policy={} heuristic={}",
            self.initial.side(),
            self.policy.reinsertion,
            self.heuristic.name()
        );
        let root = self.arena.push(
            0,
            self.initial.clone(),
            &self.goal,
            None,
            self.heuristic,
        );
        self.visited.mark(&self.initial);
        self.frontier.push(&self.arena[root]);
        self.phase = DriverPhase::Running;
    }

    fn iterate(&mut self) {
        let Some(current_id) = self.frontier.pop() else {
            self.phase = DriverPhase::Exhausted;
            return;
        };

        let current = &self.arena[current_id];
        if current.h_cost() == 0 {
            self.phase = DriverPhase::Solved {
                node_id: current_id,
            };
            return;
        }

        let expansion_order = self.expansions.len() as u64;
        let pop_key = current.key();
        let g_cost = current.g_cost();
        let blank = current.blank_index();
        let state = current.state().clone();
        self.observer.on_expand(current, expansion_order);

        let mut candidates = Vec::new();
        let mut batch: Vec<NodeId> = Vec::new();
        for (direction, target_index) in legal_slides(blank, state.side()) {
            let candidate = state.apply_move(blank, target_index);
            let state_key = candidate.canonical_key();
            if !self.visited.insert(state_key.clone()) {
                self.total_duplicates_suppressed += 1;
                candidates.push(CandidateRecord {
                    direction,
                    target_index,
                    outcome: CandidateOutcome::DuplicateSuppressed { state_key },
                });
                continue;
            }
            let child_id = self.arena.push(
                g_cost + 1,
                candidate,
                &self.goal,
                Some(current_id),
                self.heuristic,
            );
            let child = &self.arena[child_id];
            candidates.push(CandidateRecord {
                direction,
                target_index,
                outcome: CandidateOutcome::Generated {
                    node_id: child_id,
                    f_cost: child.f_cost(),
                    g_cost: child.g_cost(),
                },
            });
            batch.push(child_id);
        }

        let children: Vec<&SearchNode> = batch.iter().map(|id| &self.arena[*id]).collect();
        self.observer.on_children(&self.arena[current_id], &children);

        let reinserted = select_reinserted(&self.arena, &batch, self.policy.reinsertion);
        for id in &reinserted {
            self.frontier.push(&self.arena[*id]);
            self.observer.on_reinsert(&self.arena[*id]);
        }
        self.total_discarded += (batch.len() - reinserted.len()) as u64;

        debug!(
            "expand #{expansion_order}: node={current_id} f={} g={} children={} reinserted={} frontier={}",
            pop_key.f_cost,
            pop_key.g_cost,
            batch.len(),
            reinserted.len(),
            self.frontier.len()
        );

        self.expansions.push(ExpandEvent {
            expansion_order,
            node_id: current_id,
            state_key: state.canonical_key(),
            pop_key,
            candidates,
            reinserted,
        });
    }

    fn finish(self) -> SearchResult {
        let (outcome, termination_reason) = match self.phase {
            DriverPhase::Solved { node_id } => {
                let goal_node = &self.arena[node_id];
                let path = reconstruct_path(&self.arena, node_id);
                let moves = move_sequence(&path);
                let reason = TerminationReason::GoalReached {
                    node_id,
                    g_cost: goal_node.g_cost(),
                };
                let solution = Solution {
                    path,
                    moves,
                    g_cost: goal_node.g_cost(),
                    h_cost: goal_node.h_cost(),
                    goal_node: node_id,
                };
                (SearchOutcome::Solved(solution), reason)
            }
            DriverPhase::Ready | DriverPhase::Running | DriverPhase::Exhausted => {
                (SearchOutcome::Exhausted, TerminationReason::FrontierExhausted)
            }
        };

        match &outcome {
            SearchOutcome::Solved(s) => info!(
                "search solved: moves={} expansions={} nodes={}",
                s.g_cost,
                self.expansions.len(),
                self.arena.len()
            ),
            SearchOutcome::Exhausted => info!(
                "search exhausted: expansions={} nodes={} discarded={}",
                self.expansions.len(),
                self.arena.len(),
                self.total_discarded
            ),
        }
        self.observer.on_finish(&outcome);

        let metadata = SearchGraphMetadata {
            side: self.initial.side(),
            initial_key: self.initial.canonical_key(),
            goal_key: self.goal.canonical_key(),
            heuristic: self.heuristic.name().to_string(),
            reinsertion: self.policy.reinsertion,
            total_expansions: self.expansions.len() as u64,
            total_nodes: self.arena.len() as u64,
            total_duplicates_suppressed: self.total_duplicates_suppressed,
            total_discarded: self.total_discarded,
            visited_count: self.visited.len() as u64,
            frontier_high_water: self.frontier.high_water() as u64,
            termination_reason,
        };
        let graph = SearchGraph {
            expansions: self.expansions,
            node_summaries: NodeSummary::index(&self.arena),
            metadata,
        };

        SearchResult {
            outcome,
            graph,
            nodes: self.arena,
        }
    }
}

/// Children of one expansion that go back on the frontier.
///
/// `BestChildOnly` keeps the minimum by `(f, g)`; on an exact tie the child
/// generated first wins.
fn select_reinserted(
    arena: &NodeArena,
    batch: &[NodeId],
    policy: ReinsertionPolicy,
) -> Vec<NodeId> {
    match policy {
        ReinsertionPolicy::BestChildOnly => batch
            .iter()
            .copied()
            .min_by_key(|id| arena[*id].key())
            .into_iter()
            .collect(),
        ReinsertionPolicy::AllChildren => batch.to_vec(),
    }
}

/// Run a search to completion.
///
/// # Errors
///
/// Returns [`SearchError::SideMismatch`] if the boards differ in side.
pub fn search(
    initial: Board,
    goal: Board,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
    observer: &mut dyn SearchObserver,
) -> Result<SearchResult, SearchError> {
    Ok(SearchDriver::new(initial, goal, policy, heuristic, observer)?.run())
}

/// Validate raw cell sequences and search with the misplaced-tiles heuristic.
///
/// # Errors
///
/// - [`SearchError::Board`] if either sequence is not a valid board.
/// - [`SearchError::SideMismatch`] if the boards differ in side.
pub fn solve(
    initial: &[u32],
    goal: &[u32],
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    let initial = Board::new(initial.to_vec())?;
    let goal = Board::new(goal.to_vec())?;
    search(initial, goal, policy, &MisplacedTiles, &mut NoopObserver)
}
