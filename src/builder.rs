//! Exhaustive game tree construction
//!
//! The builder expands a board into every reachable position until all
//! leaves are terminal. There is no memoization and no symmetry reduction:
//! from the empty board this materializes 549,946 nodes, which is still
//! cheap enough to build once per game.

use log::debug;

use crate::board::{Board, Mark};
use crate::terminal;
use crate::tree::{GameTree, GameTreeNode, NodeId};

/// Builds complete game trees scored for a fixed player
#[derive(Debug, Clone, Copy)]
pub struct GameTreeBuilder {
    player_to_win: Mark,
}

impl GameTreeBuilder {
    /// Creates a builder whose leaf scores are relative to `player_to_win`
    pub fn new(player_to_win: Mark) -> Self {
        GameTreeBuilder { player_to_win }
    }

    pub fn player_to_win(&self) -> Mark {
        self.player_to_win
    }

    /// Builds the full tree rooted at `board`
    ///
    /// The player to move at the root is `board.to_move()`. Terminal nodes
    /// are scored immediately; internal nodes are left for the
    /// [`MinimaxEvaluator`](crate::minimax::MinimaxEvaluator).
    pub fn build(&self, board: Board) -> GameTree {
        let mut tree = GameTree::with_capacity(estimate_size(board.empty_count()));
        self.expand(&mut tree, board, 0);

        debug!(
            "Built game tree of {} nodes from a board with {} empty cells",
            tree.len(),
            board.empty_count()
        );
        tree
    }

    fn expand(&self, tree: &mut GameTree, board: Board, depth: usize) -> NodeId {
        if let Some(outcome) = terminal::outcome(&board) {
            let score = outcome.score_for(self.player_to_win);
            return tree.push(GameTreeNode::leaf(board, score, depth));
        }

        let id = tree.push(GameTreeNode::internal(board, depth));
        for mv in board.empty_cells() {
            if let Some(next) = board.play(mv) {
                let child = self.expand(tree, next, depth + 1);
                tree.get_mut(id).children.push(child);
            }
        }
        id
    }
}

/// Upper bound on the node count for `empty` free cells, ignoring early wins
fn estimate_size(empty: usize) -> usize {
    // 1 + n + n(n-1) + ... + n!
    let mut total = 1usize;
    let mut level = 1usize;
    for k in (1..=empty).rev() {
        level *= k;
        total += level;
    }
    total
}
