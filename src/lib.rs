//! # arboriter-minimax
//!
//! A perfect-play Tic-Tac-Toe engine built on exhaustive game tree
//! construction and minimax evaluation.
//!
//! The engine never loses: it builds the complete tree of positions reachable
//! from the board after the first move, scores every node by backward
//! induction for the player it represents, and then answers each of its turns
//! by reading the scores of the current node's children.
//!
//! ## Features
//!
//! - Immutable [`Board`] values with explicit cell-wise equality
//! - Arena-allocated [`GameTree`] addressed by [`NodeId`]
//! - Deterministic move choice: ties go to the first cell in row-major order
//! - A tick-driven [`GameSession`] with a fixed-rate [`GameLoop`]
//! - Tree statistics and visualization
//!
//! ## Basic Usage
//!
//! ```
//! use arboriter_minimax::{
//!     Board, GameTreeBuilder, Mark, MinimaxEvaluator, MoveSelector, Move, Score,
//! };
//!
//! fn main() -> Result<(), arboriter_minimax::MinimaxError> {
//!     // X has opened in the center; the engine plays O
//!     let board = Board::new().play(Move::CENTER).unwrap();
//!
//!     let mut tree = GameTreeBuilder::new(Mark::O).build(board);
//!     let value = MinimaxEvaluator::new(Mark::O).evaluate(&mut tree)?;
//!     assert_eq!(value, Score::Draw);
//!
//!     // The best reply to a center opening is a corner
//!     let reply = MoveSelector::new().select_move(&tree, tree.root_id())?;
//!     assert_eq!(reply, Move::new(0, 0));
//!     Ok(())
//! }
//! ```
//!
//! ## Playing a Session
//!
//! ```
//! use arboriter_minimax::{EngineConfig, GameSession, Mark, Move, TickOutcome};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), arboriter_minimax::MinimaxError> {
//!     let config = EngineConfig::default()
//!         .with_player_to_win(Mark::X)
//!         .with_think_delay(Duration::ZERO);
//!     let mut session = GameSession::new(config)?;
//!
//!     // The engine moves first and takes the center
//!     assert_eq!(
//!         session.tick()?,
//!         TickOutcome::Moved { mark: Mark::X, mv: Move::CENTER }
//!     );
//!
//!     // The human answers in a corner
//!     session.submit_cell_selection(0, 0);
//!     session.tick()?;
//!     assert_eq!(session.move_count(), 2);
//!     assert_eq!(session.current_node().unwrap().board, *session.board());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. **Construction**: [`GameTreeBuilder`] expands every empty cell of every
//!    non-terminal board until all leaves are wins or draws. Leaves are scored
//!    +1, 0 or -1 for the player to win.
//!
//! 2. **Evaluation**: [`MinimaxEvaluator`] folds child scores upward with max
//!    at nodes where the player to win moves and min everywhere else.
//!
//! 3. **Selection**: [`MoveSelector`] takes the first child with the highest
//!    score and returns the cell that differs from the parent board.
//!
//! The session runs construction and evaluation once, after the first move.
//! Later moves only walk down the existing tree.

pub mod board;
pub mod builder;
pub mod config;
pub mod minimax;
pub mod render;
pub mod runner;
pub mod selector;
pub mod session;
pub mod stats;
pub mod terminal;
pub mod tree;

pub use board::{next_player, Board, Cell, Mark, Move};
pub use builder::GameTreeBuilder;
pub use config::{EngineConfig, InputPolicy};
pub use minimax::MinimaxEvaluator;
pub use render::{BoardRenderer, TextRenderer};
pub use runner::{start_session, GameLoop, InputEvent, InputSource, PlayerSelector};
pub use selector::MoveSelector;
pub use session::{GameSession, SessionPhase, TickOutcome};
pub use stats::TreeStatistics;
pub use terminal::{is_draw, is_line_win, is_terminal, outcome, winner, Outcome, Score};
pub use tree::{GameTree, GameTreeNode, NodeId};

/// Error types for the engine
#[derive(thiserror::Error, Debug)]
pub enum MinimaxError {
    /// The game was started without choosing the engine's mark
    #[error("No player to win selected before game start")]
    NoPlayerToWin,

    /// A move was requested from a node without children
    #[error("No legal moves available from current node")]
    NoLegalMoves,

    /// A node needed for move selection has not been scored
    #[error("Node {0} has no score")]
    UnscoredNode(NodeId),

    /// A child board does not differ from its parent
    #[error("Child board does not differ from its parent")]
    NoBoardDelta,

    /// The live board has no matching node in the game tree
    #[error("Game tree out of sync with live board:\n{board}")]
    TreeDesync { board: Board },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, MinimaxError>;
