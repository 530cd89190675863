//! Best-move extraction from a scored tree

use crate::board::Move;
use crate::terminal::Score;
use crate::tree::{GameTree, NodeId};
use crate::{MinimaxError, Result};

/// Picks the move leading to the best scored child of a node
///
/// Children are compared in stored (row-major) order and the running best
/// is only replaced by a strictly greater score, so ties go to the earliest
/// child.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector;

impl MoveSelector {
    pub fn new() -> Self {
        MoveSelector
    }

    /// Returns the id of the best child of `id`
    pub fn best_child(&self, tree: &GameTree, id: NodeId) -> Result<NodeId> {
        let mut best: Option<(NodeId, Score)> = None;

        for (child_id, child) in tree.children(id) {
            let score = child.score.ok_or(MinimaxError::UnscoredNode(child_id))?;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(child_id, _)| child_id)
            .ok_or(MinimaxError::NoLegalMoves)
    }

    /// Returns the move from the board at `id` to its best child
    pub fn select_move(&self, tree: &GameTree, id: NodeId) -> Result<Move> {
        let child = self.best_child(tree, id)?;
        tree.get(id)
            .board
            .diff(&tree.get(child).board)
            .ok_or(MinimaxError::NoBoardDelta)
    }
}
