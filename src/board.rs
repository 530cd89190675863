//! Board representation for Tic-Tac-Toe
//!
//! A [`Board`] is an immutable value: placing a mark never modifies the
//! original, it returns the successor board with the turn already switched.

use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The two symbols a player can place on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Moves first
    X,
    /// Moves second
    O,
}

impl Mark {
    /// Returns the other mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Returns the mark that moves after `mark`
pub fn next_player(mark: Mark) -> Mark {
    mark.opponent()
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the mark in this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// A cell placement, zero-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// The center cell, the designated player's opening move
    pub const CENTER: Move = Move { row: 1, col: 1 };

    /// Returns true if the move lies on the board
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index of the cell (0-8)
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Builds a move from a row-major index
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells plus the mark to move next
///
/// Equality compares the nine cells only. In legal play the mark to move is
/// fully determined by the cells, and the game session relies on this
/// comparison to find the tree node matching the live board.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    to_move: Mark,
}

impl Board {
    /// Creates an empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            to_move: Mark::X,
        }
    }

    /// Creates a board from explicit cells and the mark to move
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE], to_move: Mark) -> Self {
        Board { cells, to_move }
    }

    /// Returns the cell at the given position, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All cells, row by row
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// The mark that moves next on this board
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns true if `mv` is on the board and its cell is empty
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.in_bounds() && self.cells[mv.row][mv.col].is_empty()
    }

    /// Empty cells in row-major scan order
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        (0..CELL_COUNT)
            .map(Move::from_index)
            .filter(move |mv| self.cells[mv.row][mv.col].is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the successor board with the mover's mark placed at `mv`
    ///
    /// Returns `None` if the move is out of bounds or the cell is occupied.
    pub fn play(&self, mv: Move) -> Option<Board> {
        if !self.is_legal(mv) {
            return None;
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = Cell::from(self.to_move);
        next.to_move = next_player(self.to_move);
        Some(next)
    }

    /// Returns the first cell (row-major) whose content differs from `other`
    pub fn diff(&self, other: &Board) -> Option<Move> {
        (0..CELL_COUNT)
            .map(Move::from_index)
            .find(|mv| self.cells[mv.row][mv.col] != other.cells[mv.row][mv.col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .all(|(a, b)| a == b)
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", row)?;
            for cell in cells {
                let symbol = match cell {
                    Cell::X => "X",
                    Cell::O => "O",
                    Cell::Empty => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
