//! Statistics collection for game trees
//!
//! This module provides a summary of the tree built for a game: its size,
//! how its leaves end for the player to win, and how long construction and
//! evaluation took.

use std::time::Duration;

use crate::terminal::Score;
use crate::tree::GameTree;

/// Statistics about a built and evaluated game tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStatistics {
    /// Total number of nodes in the tree
    pub node_count: usize,

    /// Number of terminal nodes
    pub terminal_count: usize,

    /// Terminal nodes won by the player to win
    pub win_leaves: usize,

    /// Terminal nodes ending in a draw
    pub draw_leaves: usize,

    /// Terminal nodes won by the opponent
    pub loss_leaves: usize,

    /// Maximum depth below the root
    pub max_depth: usize,

    /// Time spent building the tree
    pub build_time: Duration,

    /// Time spent in the minimax pass
    pub evaluation_time: Duration,
}

impl TreeStatistics {
    /// Collects node counts from `tree`; timings start at zero
    pub fn from_tree(tree: &GameTree) -> Self {
        let mut stats = TreeStatistics {
            node_count: tree.len(),
            terminal_count: 0,
            win_leaves: 0,
            draw_leaves: 0,
            loss_leaves: 0,
            max_depth: 0,
            build_time: Duration::ZERO,
            evaluation_time: Duration::ZERO,
        };

        for (_, node) in tree.iter() {
            stats.max_depth = stats.max_depth.max(node.depth);
            if !node.terminal {
                continue;
            }
            stats.terminal_count += 1;
            match node.score {
                Some(Score::Win) => stats.win_leaves += 1,
                Some(Score::Draw) => stats.draw_leaves += 1,
                Some(Score::Loss) => stats.loss_leaves += 1,
                None => {}
            }
        }

        stats
    }

    /// Sets the measured build and evaluation durations
    pub fn with_timings(mut self, build_time: Duration, evaluation_time: Duration) -> Self {
        self.build_time = build_time;
        self.evaluation_time = evaluation_time;
        self
    }

    /// Returns the number of nodes built per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.build_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.node_count as f64 / self.build_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Game Tree Statistics:\n\
             - Nodes: {}\n\
             - Terminal nodes: {} ({} won, {} drawn, {} lost)\n\
             - Max depth: {}\n\
             - Build time: {:.3} ms ({:.0} nodes/s)\n\
             - Evaluation time: {:.3} ms",
            self.node_count,
            self.terminal_count,
            self.win_leaves,
            self.draw_leaves,
            self.loss_leaves,
            self.max_depth,
            self.build_time.as_secs_f64() * 1000.0,
            self.nodes_per_second(),
            self.evaluation_time.as_secs_f64() * 1000.0
        )
    }
}
