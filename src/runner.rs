//! Fixed-rate game loop
//!
//! The loop polls an [`InputSource`], ticks the [`GameSession`], hands the
//! live board to a [`BoardRenderer`] and sleeps out the rest of the frame.
//! Everything runs on the calling thread.

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Mark;
use crate::config::EngineConfig;
use crate::render::BoardRenderer;
use crate::session::GameSession;
use crate::terminal::Outcome;
use crate::{MinimaxError, Result};

/// Events produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The human picked a cell
    Select { row: usize, col: usize },
    /// The human wants to stop playing
    Quit,
}

/// Source of human input, polled once per tick
pub trait InputSource {
    /// Returns the events received since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Pre-game choice of the engine's mark
///
/// The call blocks until the human has chosen. `None` means no choice was
/// made and the game must not start.
pub trait PlayerSelector {
    fn choose_player_to_win(&mut self) -> Option<Mark>;
}

/// Asks `selector` for the engine's mark and creates the session
pub fn start_session<P: PlayerSelector>(
    selector: &mut P,
    config: EngineConfig,
) -> Result<GameSession> {
    let player_to_win = selector
        .choose_player_to_win()
        .ok_or(MinimaxError::NoPlayerToWin)?;
    GameSession::new(config.with_player_to_win(player_to_win))
}

/// Drives a session at the configured tick rate
pub struct GameLoop<I, R> {
    session: GameSession,
    input: I,
    renderer: R,
    frame: Duration,
    ticks: u64,
}

impl<I: InputSource, R: BoardRenderer> GameLoop<I, R> {
    pub fn new(session: GameSession, input: I, renderer: R) -> Self {
        let frame = session.config().frame_duration();
        GameLoop {
            session,
            input,
            renderer,
            frame,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of ticks executed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs a single frame: input, update, render
    pub fn step(&mut self) -> Result<()> {
        for event in self.input.poll() {
            match event {
                InputEvent::Select { row, col } => {
                    self.session.submit_cell_selection(row, col)
                }
                InputEvent::Quit => self.session.request_quit(),
            }
        }

        self.session.tick()?;
        self.renderer.render(self.session.board());
        self.ticks += 1;
        Ok(())
    }

    /// Runs until the game ends or a quit is requested
    ///
    /// Returns the outcome if the game reached a terminal board.
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        self.renderer.render(self.session.board());

        while self.session.is_alive() {
            let start = Instant::now();
            self.step()?;

            let elapsed = start.elapsed();
            if elapsed < self.frame {
                thread::sleep(self.frame - elapsed);
            }
        }

        let outcome = self.session.outcome();
        match outcome {
            Some(outcome) => info!("Finished after {} ticks: {}", self.ticks, outcome),
            None => debug!("Stopped after {} ticks without a result", self.ticks),
        }
        Ok(outcome)
    }

    /// Consumes the loop and returns the session
    pub fn into_session(self) -> GameSession {
        self.session
    }
}
