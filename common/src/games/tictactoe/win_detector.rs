use super::board::Board;
use super::types::{Mark, Position};

/// The 8 lines of three: rows, columns, then both diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES.iter().any(|line| {
        line.iter()
            .all(|&(row, col)| board.get(Position::new(row, col)) == mark)
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}
