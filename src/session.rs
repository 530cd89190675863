//! Turn sequencing for a game against the engine
//!
//! A [`GameSession`] owns the live board and advances it one tick at a time:
//! either by consuming a pending human selection or by letting the engine
//! move for the player to win. The game tree is built and scored exactly once,
//! right after the first move, and afterwards only traversed: every applied
//! move relocates the current node to the child matching the live board.

use std::collections::VecDeque;
use std::thread;
use std::time::Instant;

use log::{debug, error, info};

use crate::board::{Board, Mark, Move};
use crate::builder::GameTreeBuilder;
use crate::config::{EngineConfig, InputPolicy};
use crate::minimax::MinimaxEvaluator;
use crate::selector::MoveSelector;
use crate::stats::TreeStatistics;
use crate::terminal::{self, Outcome, Score};
use crate::tree::{GameTree, GameTreeNode, NodeId};
use crate::{MinimaxError, Result};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nobody has moved yet and no tree exists
    NoMovesYet,
    /// The tree exists and the game is running
    InProgress,
    /// The live board is terminal
    Finished,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed: no input, an ignored selection, or a stalled engine
    Idle,
    /// `mark` was placed at `mv`
    Moved { mark: Mark, mv: Move },
}

/// A game between a human and the engine
#[derive(Debug)]
pub struct GameSession {
    config: EngineConfig,
    player_to_win: Mark,
    board: Board,
    history: Vec<Board>,
    tree: Option<GameTree>,
    current: Option<NodeId>,
    moves: usize,
    journal: VecDeque<Move>,
    alive: bool,
    phase: SessionPhase,
    statistics: Option<TreeStatistics>,
    selector: MoveSelector,
}

impl GameSession {
    /// Creates a session on an empty board
    ///
    /// Fails with [`MinimaxError::NoPlayerToWin`] if the configuration does
    /// not name the engine's mark.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let player_to_win = config.validate()?;
        let board = Board::new();

        info!(
            "New game: engine plays {}, human plays {}",
            player_to_win,
            player_to_win.opponent()
        );

        Ok(GameSession {
            config,
            player_to_win,
            board,
            history: vec![board],
            tree: None,
            current: None,
            moves: 0,
            journal: VecDeque::new(),
            alive: true,
            phase: SessionPhase::NoMovesYet,
            statistics: None,
            selector: MoveSelector::new(),
        })
    }

    /// Queues a human cell selection for a later tick
    pub fn submit_cell_selection(&mut self, row: usize, col: usize) {
        self.journal.push_back(Move::new(row, col));
    }

    /// Stops the session; later ticks do nothing
    pub fn request_quit(&mut self) {
        debug!("Quit requested after {} moves", self.moves);
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every board of the game so far, starting with the empty board
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn player_to_win(&self) -> Mark {
        self.player_to_win
    }

    pub fn human_mark(&self) -> Mark {
        self.player_to_win.opponent()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of selections waiting to be consumed
    pub fn pending_selections(&self) -> usize {
        self.journal.len()
    }

    /// The game tree, once the first move has been made
    pub fn tree(&self) -> Option<&GameTree> {
        self.tree.as_ref()
    }

    pub fn current_id(&self) -> Option<NodeId> {
        self.current
    }

    /// The tree node matching the live board
    pub fn current_node(&self) -> Option<&GameTreeNode> {
        let tree = self.tree.as_ref()?;
        self.current.map(|id| tree.get(id))
    }

    /// The minimax value of the live board for the player to win
    pub fn predicted_score(&self) -> Option<Score> {
        self.current_node().and_then(|node| node.score)
    }

    pub fn statistics(&self) -> Option<&TreeStatistics> {
        self.statistics.as_ref()
    }

    /// The result of the game, once the live board is terminal
    pub fn outcome(&self) -> Option<Outcome> {
        terminal::outcome(&self.board)
    }

    /// Advances the game by at most one move
    ///
    /// Invalid selections and an engine with nothing to play are ignored.
    /// An error stops the session and leaves the board as it was before the
    /// failed tick.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.alive || self.phase == SessionPhase::Finished {
            return Ok(TickOutcome::Idle);
        }

        let mover = self.board.to_move();
        let mv = if mover == self.player_to_win {
            let Some(mv) = self.engine_move()? else {
                return Ok(TickOutcome::Idle);
            };
            if !self.config.think_delay.is_zero() {
                thread::sleep(self.config.think_delay);
            }
            mv
        } else {
            let Some(mv) = self.take_selection() else {
                return Ok(TickOutcome::Idle);
            };
            mv
        };

        let Some(next) = self.board.play(mv) else {
            debug!("Ignoring selection {}: off the board or occupied", mv);
            return Ok(TickOutcome::Idle);
        };

        if let Err(e) = self.commit(next) {
            self.alive = false;
            return Err(e);
        }
        debug!("{} played {} (move {})", mover, mv, self.moves);
        Ok(TickOutcome::Moved { mark: mover, mv })
    }

    fn take_selection(&mut self) -> Option<Move> {
        match self.config.input_policy {
            InputPolicy::LatestOnly => {
                let latest = self.journal.pop_back();
                self.journal.clear();
                latest
            }
            InputPolicy::Fifo => self.journal.pop_front(),
        }
    }

    fn engine_move(&self) -> Result<Option<Move>> {
        if self.moves == 0 {
            return Ok(Some(self.config.opening_move));
        }

        let (Some(tree), Some(current)) = (self.tree.as_ref(), self.current) else {
            return Ok(None);
        };
        if tree.get(current).is_leaf() {
            return Ok(None);
        }

        self.selector.select_move(tree, current).map(Some)
    }

    fn commit(&mut self, next: Board) -> Result<()> {
        if self.moves > 0 {
            self.current = Some(self.locate(&next)?);
        }

        self.board = next;
        self.history.push(next);
        self.moves += 1;

        if self.moves == 1 {
            self.build_tree()?;
            self.phase = SessionPhase::InProgress;
        }

        if let Some(outcome) = terminal::outcome(&self.board) {
            info!("Game over after {} moves: {}", self.moves, outcome);
            self.phase = SessionPhase::Finished;
            self.alive = false;
        }
        Ok(())
    }

    fn build_tree(&mut self) -> Result<()> {
        let start = Instant::now();
        let mut tree = GameTreeBuilder::new(self.player_to_win).build(self.board);
        let build_time = start.elapsed();

        let start = Instant::now();
        let root_score = MinimaxEvaluator::new(self.player_to_win).evaluate(&mut tree)?;
        let statistics =
            TreeStatistics::from_tree(&tree).with_timings(build_time, start.elapsed());

        info!(
            "Game tree ready: {} nodes, value {} for {}",
            statistics.node_count, root_score, self.player_to_win
        );
        debug!("{}", statistics.summary());

        self.current = Some(tree.root_id());
        self.tree = Some(tree);
        self.statistics = Some(statistics);
        Ok(())
    }

    /// Finds the child of the current node matching `next`
    fn locate(&self, next: &Board) -> Result<NodeId> {
        let found = match (self.tree.as_ref(), self.current) {
            (Some(tree), Some(current)) => tree.find_child(current, next),
            _ => None,
        };

        found.ok_or_else(|| {
            error!("No tree node matches the board:\n{}", next);
            MinimaxError::TreeDesync { board: *next }
        })
    }
}
