//! Terminal state classification
//!
//! A board is terminal when one mark fills a row, column or diagonal, or when
//! no empty cell remains. Scores are always expressed relative to a single
//! designated player, the "player to win".

use std::fmt;

use crate::board::{Board, Cell, Mark};

/// The eight winning lines as (row, col) triples
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Value of a position for the designated player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    Loss,
    Draw,
    Win,
}

impl Score {
    /// Integer form of the score: -1, 0 or +1
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Scores this outcome for `player_to_win`
    pub fn score_for(self, player_to_win: Mark) -> Score {
        match self {
            Outcome::Win(mark) if mark == player_to_win => Score::Win,
            Outcome::Win(_) => Score::Loss,
            Outcome::Draw => Score::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

fn line_owner(board: &Board, line: [(usize, usize); 3]) -> Option<Mark> {
    let cells = board.cells();
    let [a, b, c] = line.map(|(row, col)| cells[row][col]);
    if a != Cell::Empty && a == b && b == c {
        a.mark()
    } else {
        None
    }
}

/// Returns true if `mark` fills any row, column or diagonal
pub fn is_line_win(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line_owner(board, *line) == Some(mark))
}

/// Returns the mark owning a complete line, if any
///
/// Boards with two winning marks cannot arise in legal play; for such boards
/// the first line found (rows, then columns, then diagonals) wins.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, *line))
}

/// Returns true if the board is full and nobody has won
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

/// Returns true if the game is over on this board
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Returns the outcome of a terminal board, or `None` while play continues
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(mark) => Some(Outcome::Win(mark)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}
