//! Search nodes, their frontier ordering key, and the node arena.

use tileslide_kernel::board::Board;
use tileslide_kernel::heuristic::Heuristic;

/// Index of a node in its [`NodeArena`].
pub type NodeId = usize;

/// An immutable search node.
///
/// `h` and `f = g + h` are computed once in [`NodeArena::push`] and there is
/// no way to change any field afterwards, so `f == g + h` holds for the
/// node's whole life. `parent_id` points back into the arena and is only
/// used for path reconstruction.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    parent_id: Option<NodeId>,
    state: Board,
    blank_index: usize,
    g_cost: u32,
    h_cost: u32,
    f_cost: u32,
}

impl SearchNode {
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Parent node ID (`None` for the root).
    #[must_use]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    #[must_use]
    pub fn state(&self) -> &Board {
        &self.state
    }

    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    /// Slides taken from the root (root = 0).
    #[must_use]
    pub fn g_cost(&self) -> u32 {
        self.g_cost
    }

    /// Heuristic estimate of slides remaining; `0` means this is the goal.
    #[must_use]
    pub fn h_cost(&self) -> u32 {
        self.h_cost
    }

    /// `g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.f_cost
    }

    /// The frontier ordering key of this node.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey::from(self)
    }
}

/// The ordering key: `(f_cost, g_cost)`, lower first on both.
///
/// On an `f_cost` tie the node that has spent fewer real slides wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontierKey {
    pub f_cost: u32,
    pub g_cost: u32,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.g_cost.cmp(&other.g_cost))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost,
            g_cost: node.g_cost,
        }
    }
}

/// Owns every node created during one search run.
///
/// Node IDs are dense and assigned in creation order, so `nodes[id]` is the
/// node with `node_id == id`.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node and return its ID.
    ///
    /// `state` is moved into the node; the node owns it exclusively.
    pub fn push(
        &mut self,
        g_cost: u32,
        state: Board,
        goal: &Board,
        parent_id: Option<NodeId>,
        heuristic: &dyn Heuristic,
    ) -> NodeId {
        let node_id = self.nodes.len();
        let h_cost = heuristic.estimate(&state, goal);
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            blank_index: state.blank_index(),
            state,
            g_cost,
            h_cost,
            f_cost: g_cost.saturating_add(h_cost),
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }
}

impl<'a> IntoIterator for &'a NodeArena {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
