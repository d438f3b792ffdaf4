//! Harness runner: builds boards, runs one search, and summarizes it.
//!
//! The runner uses only kernel and search APIs. It does not implement any
//! search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! Board::with_side() × 2 → reachable() (warn only)
//!   → search() → SearchGraph::digest() → RunReport
//! ```

use log::{info, warn};

use tileslide_kernel::board::{reachable, Board};
use tileslide_kernel::error::BoardError;
use tileslide_kernel::heuristic::MisplacedTiles;
use tileslide_kernel::proof::canon::CanonError;
use tileslide_kernel::proof::hash::ContentHash;
use tileslide_search::error::SearchError;
use tileslide_search::observer::SearchObserver;
use tileslide_search::search::{search, SearchOutcome, SearchResult};

use crate::config::RunConfig;

/// Error during a harness run.
#[derive(Debug)]
pub enum RunError {
    /// The initial arrangement is not a valid board.
    InitialBoard(BoardError),
    /// The goal arrangement is not a valid board.
    GoalBoard(BoardError),
    Search(SearchError),
    /// Graph or policy serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InitialBoard(e) => write!(f, "initial state: {e}"),
            Self::GoalBoard(e) => write!(f, "goal state: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Canon(e) => write!(f, "canonical JSON: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InitialBoard(e) | Self::GoalBoard(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub solved: bool,
    /// Whether the parity invariant allows the goal at all.
    pub reachable: bool,
    /// Blank directions, `up`/`down`/`left`/`right`. Empty when unsolved.
    pub moves: Vec<String>,
    pub g_cost: Option<u32>,
    pub h_cost: Option<u32>,
    /// Canonical keys from initial to goal. Empty when unsolved.
    pub path_keys: Vec<String>,
    pub total_expansions: u64,
    pub total_nodes: u64,
    pub graph_digest: ContentHash,
    pub policy_digest: ContentHash,
}

impl RunReport {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "g_cost": self.g_cost,
            "graph_digest": self.graph_digest.as_str(),
            "h_cost": self.h_cost,
            "moves": self.moves,
            "path_keys": self.path_keys,
            "policy_digest": self.policy_digest.as_str(),
            "reachable": self.reachable,
            "solved": self.solved,
            "total_expansions": self.total_expansions,
            "total_nodes": self.total_nodes,
        })
    }
}

/// Report plus the full search result it was derived from.
#[derive(Debug)]
pub struct RunOutput {
    pub report: RunReport,
    pub result: SearchResult,
}

fn build_board(side: Option<usize>, cells: &[u32]) -> Result<Board, BoardError> {
    match side {
        Some(side) => Board::with_side(side, cells.to_vec()),
        None => Board::new(cells.to_vec()),
    }
}

/// Run one search over raw arrangements.
///
/// An unreachable goal is logged, not rejected: the search still runs and
/// ends exhausted.
///
/// # Errors
///
/// Returns [`RunError`] if either arrangement is invalid, the sides differ,
/// or the graph cannot be hashed.
pub fn run(
    initial: &[u32],
    goal: &[u32],
    config: &RunConfig,
    observer: &mut dyn SearchObserver,
) -> Result<RunOutput, RunError> {
    let initial = build_board(config.side, initial).map_err(RunError::InitialBoard)?;
    let goal = build_board(config.side, goal).map_err(RunError::GoalBoard)?;

    let reachable = reachable(&initial, &goal);
    if !reachable {
        warn!(
            "goal {} is not reachable from {} (parity differs); search will exhaust",
            goal.canonical_key(),
            initial.canonical_key()
        );
    }

    let result = search(initial, goal, &config.policy, &MisplacedTiles, observer)?;
    let graph_digest = result.graph.digest()?;
    let policy_digest = config.policy.digest()?;

    let report = match &result.outcome {
        SearchOutcome::Solved(solution) => RunReport {
            solved: true,
            reachable,
            moves: solution.moves.iter().map(|m| m.as_str().to_string()).collect(),
            g_cost: Some(solution.g_cost),
            h_cost: Some(solution.h_cost),
            path_keys: solution.path.iter().map(Board::canonical_key).collect(),
            total_expansions: result.graph.metadata.total_expansions,
            total_nodes: result.graph.metadata.total_nodes,
            graph_digest,
            policy_digest,
        },
        SearchOutcome::Exhausted => RunReport {
            solved: false,
            reachable,
            moves: Vec::new(),
            g_cost: None,
            h_cost: None,
            path_keys: Vec::new(),
            total_expansions: result.graph.metadata.total_expansions,
            total_nodes: result.graph.metadata.total_nodes,
            graph_digest,
            policy_digest,
        },
    };
    info!("run finished: solved={} digest={}", report.solved, report.graph_digest);

    Ok(RunOutput { report, result })
}
