//! Backward-induction scoring of a game tree
//!
//! The evaluator walks the tree in postorder. Nodes where the player to win
//! moves take the maximum of their children's scores; nodes where the
//! opponent moves take the minimum, modelling an opponent that always plays
//! against the player to win.

use crate::board::Mark;
use crate::terminal::Score;
use crate::tree::{GameTree, NodeId};
use crate::{MinimaxError, Result};

/// Scores game trees for a fixed player
#[derive(Debug, Clone, Copy)]
pub struct MinimaxEvaluator {
    player_to_win: Mark,
}

impl MinimaxEvaluator {
    /// Creates an evaluator maximizing for `player_to_win`
    pub fn new(player_to_win: Mark) -> Self {
        MinimaxEvaluator { player_to_win }
    }

    pub fn player_to_win(&self) -> Mark {
        self.player_to_win
    }

    /// Scores every node of `tree` and returns the root score
    pub fn evaluate(&self, tree: &mut GameTree) -> Result<Score> {
        self.evaluate_from(tree, tree.root_id())
    }

    /// Scores the subtree rooted at `id` and returns its score
    ///
    /// A childless node must already carry a score, as the builder gives
    /// every terminal node one; an unscored leaf is reported as
    /// [`MinimaxError::UnscoredNode`].
    pub fn evaluate_from(&self, tree: &mut GameTree, id: NodeId) -> Result<Score> {
        let child_count = tree.get(id).children.len();
        if child_count == 0 {
            return tree.get(id).score.ok_or(MinimaxError::UnscoredNode(id));
        }

        let maximizing = tree.get(id).player_to_move() == self.player_to_win;
        let mut best: Option<Score> = None;

        for index in 0..child_count {
            let child = tree.get(id).children[index];
            let score = self.evaluate_from(tree, child)?;

            best = Some(match best {
                None => score,
                Some(current) if maximizing => current.max(score),
                Some(current) => current.min(score),
            });
        }

        let score = best.ok_or(MinimaxError::UnscoredNode(id))?;
        tree.get_mut(id).score = Some(score);
        Ok(score)
    }
}
