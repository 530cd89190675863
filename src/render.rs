//! Rendering interface
//!
//! The engine knows nothing about pixels. A renderer receives the live board
//! each tick and reports the regions it redrew.

use crate::board::{Board, Cell, BOARD_SIZE};

/// Draws the live board
pub trait BoardRenderer {
    /// A unit of redrawn output, such as a screen rectangle
    type Region;

    /// Draws `board` and returns the regions that changed
    fn render(&mut self, board: &Board) -> Vec<Self::Region>;
}

/// Renders the board as one line of text per row
///
/// Only rows that differ from the previous frame are reported, so a static
/// board renders to nothing after the first frame.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    last: Option<[String; BOARD_SIZE]>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered rows
    pub fn frame(&self) -> Option<&[String; BOARD_SIZE]> {
        self.last.as_ref()
    }
}

/// A redrawn text row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    pub row: usize,
    pub text: String,
}

fn row_text(cells: &[Cell; BOARD_SIZE]) -> String {
    cells
        .iter()
        .map(|cell| match cell {
            Cell::X => "X",
            Cell::O => "O",
            Cell::Empty => ".",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl BoardRenderer for TextRenderer {
    type Region = TextRow;

    fn render(&mut self, board: &Board) -> Vec<TextRow> {
        let cells = *board.cells();
        let rows = cells.map(|row| row_text(&row));

        let changed = rows
            .iter()
            .enumerate()
            .filter(|(index, text)| {
                self.last
                    .as_ref()
                    .map_or(true, |last| last[*index] != **text)
            })
            .map(|(row, text)| TextRow {
                row,
                text: text.clone(),
            })
            .collect();

        self.last = Some(rows);
        changed
    }
}
