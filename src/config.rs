//! Configuration options for the game engine
//!
//! This module defines the parameters fixed before a game starts: which mark
//! the engine plays for, how it paces its moves and how pending human input
//! is consumed.

use std::time::Duration;

use crate::board::{Mark, Move};
use crate::{MinimaxError, Result};

/// How the session consumes pending cell selections
///
/// At most one selection is consumed per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// Use the most recent selection and discard everything older
    ///
    /// Selections made while the engine was busy are dropped rather than
    /// replayed onto a later turn.
    LatestOnly,

    /// Use selections in the order they were submitted
    Fifo,
}

/// Configuration for a game session
///
/// Use the builder methods to create a customized configuration. The player
/// to win has no default: a session refuses to start without it.
///
/// # Example
///
/// ```
/// use arboriter_minimax::{EngineConfig, Mark};
/// use std::time::Duration;
///
/// let config = EngineConfig::default()
///     .with_player_to_win(Mark::O)
///     .with_think_delay(Duration::ZERO)
///     .with_tick_rate(60);
///
/// assert_eq!(config.validate().unwrap(), Mark::O);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The mark the engine plays for; all scores are relative to it
    pub player_to_win: Option<Mark>,

    /// Pause before the engine commits a move
    ///
    /// The tree is fully scored before play, so this is purely cosmetic.
    pub think_delay: Duration,

    /// Ticks per second of the game loop
    pub tick_rate: u32,

    /// How pending human selections are consumed
    pub input_policy: InputPolicy,

    /// The engine's first move when it opens the game
    pub opening_move: Move,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            player_to_win: None,
            think_delay: Duration::from_millis(200),
            tick_rate: 30,
            input_policy: InputPolicy::LatestOnly,
            opening_move: Move::CENTER,
        }
    }
}

impl EngineConfig {
    /// Sets the mark the engine plays for
    pub fn with_player_to_win(mut self, mark: Mark) -> Self {
        self.player_to_win = Some(mark);
        self
    }

    /// Sets the pause before each engine move
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Sets the number of ticks per second
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Sets how pending selections are consumed
    pub fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Sets the engine's opening move
    pub fn with_opening_move(mut self, mv: Move) -> Self {
        self.opening_move = mv;
        self
    }

    /// Duration of one tick of the game loop
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Checks the configuration and returns the player to win
    pub fn validate(&self) -> Result<Mark> {
        if self.tick_rate == 0 {
            return Err(MinimaxError::InvalidConfiguration(
                "tick rate must be positive".to_string(),
            ));
        }
        if !self.opening_move.in_bounds() {
            return Err(MinimaxError::InvalidConfiguration(format!(
                "opening move {} is off the board",
                self.opening_move
            )));
        }
        self.player_to_win.ok_or(MinimaxError::NoPlayerToWin)
    }
}
