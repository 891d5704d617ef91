use super::board::Board;
use super::types::{Mark, Position};

pub const O_WIN_SCORE: i32 = 1;
pub const X_WIN_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// Outcome of a search: the value of the position for `O` under optimal play
/// and the move that achieves it. `best_move` is `None` only for terminal
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// `O` is the maximizing side, `X` the minimizing one.
pub fn side_mark(maximizing: bool) -> Mark {
    if maximizing { Mark::O } else { Mark::X }
}

/// Exhaustive minimax over every continuation of `board`.
///
/// Candidate cells are tried in row-major order and only a strictly better
/// score replaces the current best, so among equally good moves the first
/// one in row-major order is returned. The board is used as scratch space
/// and is identical on return.
pub fn search(board: &mut Board, maximizing: bool) -> SearchResult {
    minimax(board, 0, maximizing)
}

/// Best move for the computer (`O`), or `None` if the game is already over.
pub fn calculate_computer_move(board: &Board) -> Option<Position> {
    let mut scratch = *board;
    let result = search(&mut scratch, true);
    if let Some(pos) = result.best_move {
        crate::log!(
            "Minimax picked ({}, {}) with score {}",
            pos.row,
            pos.col,
            result.score
        );
    }
    result.best_move
}

fn terminal_score(board: &Board) -> Option<i32> {
    if board.is_winner(Mark::O) {
        return Some(O_WIN_SCORE);
    }
    if board.is_winner(Mark::X) {
        return Some(X_WIN_SCORE);
    }
    if board.is_full() {
        return Some(DRAW_SCORE);
    }
    None
}

// `depth` counts plies from the root; it does not limit the search.
fn minimax(board: &mut Board, depth: usize, is_maximizing: bool) -> SearchResult {
    if let Some(score) = terminal_score(board) {
        return SearchResult::terminal(score);
    }

    let mark = side_mark(is_maximizing);
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    for pos in board.available_moves() {
        let score = {
            let mut trial = board.trial(pos, mark);
            minimax(&mut trial, depth + 1, !is_maximizing).score
        };

        let improves = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    SearchResult {
        score: best_score,
        best_move,
    }
}
