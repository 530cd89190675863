use arboriter_minimax::{Board, Cell, Mark};

/// Parses three rows of 'X', 'O' and '.' into a board
pub fn board_from(rows: [&str; 3], to_move: Mark) -> Board {
    let mut cells = [[Cell::Empty; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
        }
    }
    Board::from_cells(cells, to_move)
}
