//! Best-first frontier.
//!
//! A `BinaryHeap` of node IDs keyed by [`FrontierKey`]. Entries with equal
//! keys are all retained; deduplication is the visited set's job. Among equal
//! keys the earlier push pops first, which keeps runs bit-reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId, SearchNode};

/// A frontier entry: the node's key plus its push sequence number.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest `(f_cost, g_cost, seq)` first.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<(FrontierKey, u64)>,
    node_id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-frontier over arena node IDs.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Never rejects: equal keys are kept side by side.
    pub fn push(&mut self, node: &SearchNode) {
        self.heap.push(FrontierEntry {
            key: Reverse((node.key(), self.next_seq)),
            node_id: node.node_id(),
        });
        self.next_seq += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return the minimum node ID.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node_id)
    }

    /// Key of the node [`Frontier::pop`] would return next.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|e| e.key.0 .0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
