use std::ops::{Deref, DerefMut};

use super::types::{Mark, Position};
use super::win_detector;

pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid. Fullness and winners are recomputed from the cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings of `X`, `O` and `.` (or space).
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[row][col] = match c {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        win_detector::is_winner(self, mark)
    }

    pub fn winner(&self) -> Option<Mark> {
        win_detector::check_win(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Caller guarantees `pos` is in bounds and empty.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn undo(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        pos.is_in_bounds() && self.get(pos) == Mark::Empty
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// Places `mark` at `pos` for as long as the returned guard lives.
    pub fn trial(&mut self, pos: Position, mark: Mark) -> TrialMove<'_> {
        self.place(pos, mark);
        TrialMove { board: self, pos }
    }
}

/// A speculative placement that is cleared when dropped, on every exit path.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_and_not_full() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_board_with_nine_marks_is_full() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_single_empty_cell_is_not_full() {
        let board = Board::from_rows(["XOX", "XOO", "OX."]);
        assert!(!board.is_full());
        assert_eq!(board.available_moves(), vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board = Board::from_rows(["X.O", ".X.", "O.."]);
        assert_eq!(
            board.available_moves(),
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_place_and_undo() {
        let mut board = Board::new();
        let pos = Position::new(1, 2);
        board.place(pos, Mark::O);
        assert_eq!(board.get(pos), Mark::O);
        assert!(!board.is_valid_move(pos));
        board.undo(pos);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_is_valid_move_rejects_out_of_bounds() {
        let board = Board::new();
        assert!(!board.is_valid_move(Position::new(3, 0)));
        assert!(!board.is_valid_move(Position::new(0, 3)));
        assert!(board.is_valid_move(Position::new(2, 2)));
    }

    #[test]
    fn test_trial_move_is_visible_then_reverted() {
        let mut board = Board::from_rows(["X..", "...", "..."]);
        let before = board;
        {
            let trial = board.trial(Position::new(1, 1), Mark::O);
            assert_eq!(trial.get(Position::new(1, 1)), Mark::O);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_trial_moves_unwind() {
        let mut board = Board::new();
        {
            let mut outer = board.trial(Position::new(0, 0), Mark::O);
            {
                let inner = outer.trial(Position::new(0, 1), Mark::X);
                assert_eq!(inner.available_moves().len(), 7);
            }
            assert_eq!(outer.available_moves().len(), 8);
        }
        assert_eq!(board, Board::new());
    }
}
