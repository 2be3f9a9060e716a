use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Columns that can still take a piece, in ascending order.
pub type LegalColumns = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Exchange Red and Yellow; Empty stays Empty.
    pub fn swapped(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Red => Cell::Yellow,
            Cell::Yellow => Cell::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'Y' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// A 6x7 gravity board. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from six rows of `.`, `R` and `Y`, top row first.
    ///
    /// Returns `None` if a row has the wrong width, contains another
    /// character, or leaves a piece floating above an empty cell.
    pub fn from_rows(rows: [&str; ROWS]) -> Option<Board> {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return None;
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol)?;
            }
        }

        let floating = (0..COLS).any(|col| {
            (0..ROWS - 1).any(|row| {
                board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty
            })
        });
        if floating {
            return None;
        }
        Some(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. Use [`Board::get_checked`]
    /// for coordinates that may fall off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Get the cell at signed coordinates, or `None` when they fall off the board.
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Check whether a column still has an empty top cell
    pub fn is_column_open(&self, col: usize) -> Result<bool, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        Ok(self.cells[0][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if !self.is_column_open(col)? {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column {col} has an empty top cell but no empty row");
    }

    /// All open columns, ascending. Empty when the board is full.
    pub fn legal_columns(&self) -> LegalColumns {
        (0..COLS)
            .filter(|&col| self.cells[0][col] == Cell::Empty)
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// A copy of this board with every Red piece turned Yellow and vice versa.
    pub fn swap_pieces(&self) -> Board {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            *cell = cell.swapped();
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(f, "1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_keeps_columns_contiguous() {
        let mut board = Board::new();
        let sequence = [3, 3, 0, 6, 3, 2, 2, 5, 3, 3, 3, 1];
        let mut cell = Cell::Red;

        for &col in &sequence {
            let expected = (0..ROWS)
                .rev()
                .find(|&row| board.get(row, col) == Cell::Empty)
                .unwrap();
            let row = board.drop_piece(col, cell).unwrap();
            assert_eq!(row, expected, "piece in column {col} should land on row {expected}");
            cell = cell.swapped();

            for c in 0..COLS {
                let filled = (0..ROWS).filter(|&r| board.get(r, c) != Cell::Empty).count();
                for r in 0..ROWS {
                    let should_be_filled = r >= ROWS - filled;
                    assert_eq!(board.get(r, c) != Cell::Empty, should_be_filled);
                }
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert_eq!(board.is_column_open(0), Ok(false));
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.is_column_open(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board, Board::new(), "rejected move must not mutate the board");
    }

    #[test]
    fn test_open_columns_match_legal_columns() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(1, Cell::Red).unwrap();
            board.drop_piece(4, Cell::Yellow).unwrap();
        }
        board.drop_piece(5, Cell::Red).unwrap();

        let legal = board.legal_columns();
        assert_eq!(legal, vec![0, 2, 3, 5, 6]);
        for col in 0..COLS {
            assert_eq!(board.is_column_open(col).unwrap(), legal.contains(&col));
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Board::new();
        let mut copy = original;
        copy.drop_piece(2, Cell::Yellow).unwrap();
        assert_eq!(original.get(5, 2), Cell::Empty);
        assert_eq!(copy.get(5, 2), Cell::Yellow);
    }

    #[test]
    fn test_get_checked_bounds() {
        let mut board = Board::new();
        board.drop_piece(6, Cell::Red).unwrap();
        assert_eq!(board.get_checked(5, 6), Some(Cell::Red));
        assert_eq!(board.get_checked(-1, 0), None);
        assert_eq!(board.get_checked(0, 7), None);
        assert_eq!(board.get_checked(6, 0), None);
    }

    #[test]
    fn test_swap_pieces() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(0, Cell::Yellow).unwrap();
        let swapped = board.swap_pieces();
        assert_eq!(swapped.get(5, 0), Cell::Yellow);
        assert_eq!(swapped.get(4, 0), Cell::Red);
        assert_eq!(swapped.get(3, 0), Cell::Empty);
        assert_eq!(swapped.swap_pieces(), board);
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            "...Y...",
            "R..R..Y",
        ])
        .unwrap();
        assert_eq!(board.get(5, 0), Cell::Red);
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.get(5, 6), Cell::Yellow);
        assert_eq!(board.piece_count(), 4);
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            "...R...",
            ".......",
            ".......",
        ]);
        assert!(board.is_none());
    }

    #[test]
    fn test_from_rows_rejects_bad_width() {
        let board = Board::from_rows(["......", "", "", "", "", ""]);
        assert!(board.is_none());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[5], "R . . . . . .");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }

    #[test]
    #[should_panic]
    fn test_get_panics_off_the_board() {
        Board::new().get(ROWS, 0);
    }
}
