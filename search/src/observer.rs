//! Iteration-boundary trace callbacks.
//!
//! The driver calls the observer at fixed points of every iteration. All
//! methods default to no-ops, so an observer implements only what it needs.
//! Observers see nodes by shared reference and cannot influence the search.

use crate::node::{NodeId, SearchNode};
use crate::search::SearchOutcome;

/// Receives search progress as it happens.
pub trait SearchObserver {
    /// A node was popped, failed the goal test, and is about to be expanded.
    fn on_expand(&mut self, _node: &SearchNode, _expansion_order: u64) {}

    /// The unvisited children generated by expanding `parent`.
    fn on_children(&mut self, _parent: &SearchNode, _children: &[&SearchNode]) {}

    /// A child was selected and pushed onto the frontier.
    fn on_reinsert(&mut self, _node: &SearchNode) {}

    /// The run reached a terminal phase.
    fn on_finish(&mut self, _outcome: &SearchOutcome) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// One recorded observer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Expand {
        node_id: NodeId,
        expansion_order: u64,
    },
    Children {
        parent_id: NodeId,
        child_ids: Vec<NodeId>,
    },
    Reinsert {
        node_id: NodeId,
    },
    Finish {
        solved: bool,
    },
}

/// Observer that records every callback as a [`TraceEvent`].
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Vec<TraceEvent>,
}

impl SearchObserver for RecordingObserver {
    fn on_expand(&mut self, node: &SearchNode, expansion_order: u64) {
        self.events.push(TraceEvent::Expand {
            node_id: node.node_id(),
            expansion_order,
        });
    }

    fn on_children(&mut self, parent: &SearchNode, children: &[&SearchNode]) {
        self.events.push(TraceEvent::Children {
            parent_id: parent.node_id(),
            child_ids: children.iter().map(|c| c.node_id()).collect(),
        });
    }

    fn on_reinsert(&mut self, node: &SearchNode) {
        self.events.push(TraceEvent::Reinsert {
            node_id: node.node_id(),
        });
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        self.events.push(TraceEvent::Finish {
            solved: outcome.is_solved(),
        });
    }
}
