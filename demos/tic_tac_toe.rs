//! Tic-Tac-Toe against the minimax engine
//!
//! This example plays a full game in the terminal. You pick your mark first;
//! the engine takes the other one and never loses.

use std::io::{self, BufRead, Write};
use std::process;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use arboriter_minimax::{
    start_session, Board, BoardRenderer, EngineConfig, GameLoop, InputEvent, InputSource, Mark,
    PlayerSelector, TextRenderer,
};

fn main() {
    // Initialize logging
    env_logger::init();

    println!("Minimax Tic-Tac-Toe Example");
    println!("===========================");
    println!();

    let mut selector = PromptSelector;
    let session = match start_session(&mut selector, EngineConfig::default()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut game = GameLoop::new(session, StdinInput::spawn(), ConsoleRenderer::default());

    match game.run() {
        Ok(Some(outcome)) => println!("Game over: {}", outcome),
        Ok(None) => println!("Game abandoned."),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    if let Some(stats) = game.session().statistics() {
        println!("{}", stats.summary());
    }
}

/// Asks which mark the human wants; the engine plays the other one
struct PromptSelector;

impl PlayerSelector for PromptSelector {
    fn choose_player_to_win(&mut self) -> Option<Mark> {
        print!("Choose your mark (X moves first) [X/O]: ");
        io::stdout().flush().ok()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input).ok()?;

        match input.trim().to_ascii_uppercase().as_str() {
            "X" => Some(Mark::O),
            "O" => Some(Mark::X),
            _ => None,
        }
    }
}

/// Reads "row col" lines on a background thread
struct StdinInput {
    lines: Receiver<String>,
    closed: bool,
}

impl StdinInput {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        StdinInput {
            lines: rx,
            closed: false,
        }
    }
}

impl InputSource for StdinInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        loop {
            match self.lines.try_recv() {
                Ok(line) => events.extend(parse_line(&line)),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.closed {
                        self.closed = true;
                        events.push(InputEvent::Quit);
                    }
                    break;
                }
            }
        }
        events
    }
}

fn parse_line(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(InputEvent::Quit);
    }

    let coords: Vec<usize> = line
        .split_whitespace()
        .filter_map(|s| s.parse::<usize>().ok())
        .collect();

    match coords[..] {
        [row, col] => Some(InputEvent::Select { row, col }),
        _ => {
            println!("Enter row and column (0-2), e.g. '1 2', or 'q' to quit.");
            None
        }
    }
}

/// Prints the whole board whenever a row changes
#[derive(Default)]
struct ConsoleRenderer {
    text: TextRenderer,
}

impl BoardRenderer for ConsoleRenderer {
    type Region = usize;

    fn render(&mut self, board: &Board) -> Vec<usize> {
        let changed: Vec<usize> = self
            .text
            .render(board)
            .into_iter()
            .map(|region| region.row)
            .collect();

        if !changed.is_empty() {
            println!("{}", board);
            println!("{} to move", board.to_move());
        }
        changed
    }
}
