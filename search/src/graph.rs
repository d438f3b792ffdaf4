//! `SearchGraph`: expansion-event audit log.
//!
//! The normative record is the ordered list of [`ExpandEvent`]s. Node
//! summaries are a derived index over the arena, enough to rebuild any path
//! from the JSON alone.

use tileslide_kernel::board::Direction;
use tileslide_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tileslide_kernel::proof::hash::{canonical_hash, ContentHash};
use tileslide_kernel::proof::hash_domain::HashDomain;

use crate::node::{FrontierKey, NodeArena, NodeId};
use crate::policy::ReinsertionPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// One summary per node, by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + expansion.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of expansions (0-based).
    pub expansion_order: u64,
    pub node_id: NodeId,
    /// Canonical key of the expanded state.
    pub state_key: String,
    /// The frontier key at time of pop.
    pub pop_key: FrontierKey,
    /// Every legal slide, in enumeration order, with what became of it.
    pub candidates: Vec<CandidateRecord>,
    /// Children pushed onto the frontier by this expansion.
    pub reinserted: Vec<NodeId>,
}

impl ExpandEvent {
    /// Children generated but not pushed.
    #[must_use]
    pub fn discarded(&self) -> Vec<NodeId> {
        self.candidates
            .iter()
            .filter_map(|c| match c.outcome {
                CandidateOutcome::Generated { node_id, .. }
                    if !self.reinserted.contains(&node_id) =>
                {
                    Some(node_id)
                }
                _ => None,
            })
            .collect()
    }
}

/// One legal slide considered during an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub direction: Direction,
    pub target_index: usize,
    pub outcome: CandidateOutcome,
}

/// What happened to a candidate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// State was new; a node was created.
    Generated {
        node_id: NodeId,
        f_cost: u32,
        g_cost: u32,
    },
    /// State was already in the visited set.
    DuplicateSuppressed { state_key: String },
}

/// Derived per-node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub state_key: String,
    pub g_cost: u32,
    pub h_cost: u32,
    pub f_cost: u32,
}

impl NodeSummary {
    /// One summary per arena node, in ID order.
    #[must_use]
    pub fn index(arena: &NodeArena) -> Vec<Self> {
        arena
            .iter()
            .map(|n| Self {
                node_id: n.node_id(),
                parent_id: n.parent_id(),
                state_key: n.state().canonical_key(),
                g_cost: n.g_cost(),
                h_cost: n.h_cost(),
                f_cost: n.f_cost(),
            })
            .collect()
    }
}

/// Run bindings and counters.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub side: usize,
    pub initial_key: String,
    pub goal_key: String,
    pub heuristic: String,
    pub reinsertion: ReinsertionPolicy,

    pub total_expansions: u64,
    pub total_nodes: u64,
    pub total_duplicates_suppressed: u64,
    pub total_discarded: u64,
    pub visited_count: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node with `h == 0` was popped.
    GoalReached { node_id: NodeId, g_cost: u32 },
    /// The frontier emptied first.
    FrontierExhausted,
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of [`SearchGraph::to_canonical_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "pop_key": {
            "f_cost": e.pop_key.f_cost,
            "g_cost": e.pop_key.g_cost,
        },
        "reinserted": e.reinserted,
        "state_key": e.state_key,
    })
}

fn candidate_to_json(c: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "direction": c.direction.as_str(),
        "outcome": outcome_to_json(&c.outcome),
        "target_index": c.target_index,
    })
}

fn outcome_to_json(o: &CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Generated {
            node_id,
            f_cost,
            g_cost,
        } => serde_json::json!({
            "f_cost": f_cost,
            "g_cost": g_cost,
            "node_id": node_id,
            "type": "generated",
        }),
        CandidateOutcome::DuplicateSuppressed { state_key } => {
            serde_json::json!({"state_key": state_key, "type": "duplicate_suppressed"})
        }
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "f_cost": n.f_cost,
        "g_cost": n.g_cost,
        "h_cost": n.h_cost,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state_key": n.state_key,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "goal_key": m.goal_key,
        "heuristic": m.heuristic,
        "initial_key": m.initial_key,
        "reinsertion": m.reinsertion.as_str(),
        "side": m.side,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_discarded": m.total_discarded,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes": m.total_nodes,
        "visited_count": m.visited_count,
    })
}

#[must_use]
pub fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id, g_cost } => {
            serde_json::json!({"g_cost": g_cost, "node_id": node_id, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
    }
}
