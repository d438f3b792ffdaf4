//! Path reconstruction over the node arena.

use tileslide_kernel::board::{Board, Direction};

use crate::node::{NodeArena, NodeId};

/// Node IDs from the root to `terminal`, inclusive.
///
/// Follows `parent_id` links; stops at the root or at an ID the arena does
/// not hold.
#[must_use]
pub fn reconstruct_ids(arena: &NodeArena, terminal: NodeId) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut current = arena.get(terminal);
    while let Some(node) = current {
        ids.push(node.node_id());
        current = node.parent_id().and_then(|id| arena.get(id));
    }
    ids.reverse();
    ids
}

/// States from the root to `terminal`, inclusive. Nodes are not modified.
#[must_use]
pub fn reconstruct_path(arena: &NodeArena, terminal: NodeId) -> Vec<Board> {
    reconstruct_ids(arena, terminal)
        .into_iter()
        .map(|id| arena[id].state().clone())
        .collect()
}

/// Blank directions between consecutive states of a path.
#[must_use]
pub fn move_sequence(path: &[Board]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|pair| {
            Direction::between(pair[0].blank_index(), pair[1].blank_index(), pair[0].side())
        })
        .collect()
}
