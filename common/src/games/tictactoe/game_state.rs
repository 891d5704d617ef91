use std::fmt;

use super::board::Board;
use super::types::{GameStatus, Mark, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds,
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds => write!(f, "Position out of bounds"),
            MoveError::Occupied => write!(f, "Cell is already marked"),
        }
    }
}

impl std::error::Error for MoveError {}

/// One game from the empty board to a terminal status.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_side: Side,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_side: Side) -> Self {
        Self {
            board: Board::new(),
            current_side: first_side,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// Validates and applies a move. A rejected move leaves the state as it was.
    pub fn place_mark(&mut self, side: Side, pos: Position) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if side != self.current_side {
            return Err(MoveError::NotYourTurn);
        }

        if !pos.is_in_bounds() {
            return Err(MoveError::OutOfBounds);
        }

        if self.board.get(pos) != Mark::Empty {
            return Err(MoveError::Occupied);
        }

        self.board.place(pos, side.mark());
        self.last_move = Some(pos);
        self.move_count += 1;

        self.check_game_over(side.mark());

        if self.status == GameStatus::InProgress {
            self.current_side = side.other();
        }

        Ok(())
    }

    // Win is checked before fullness so a last move that both wins and fills
    // the board is reported as a win.
    fn check_game_over(&mut self, placed: Mark) {
        if self.board.is_winner(placed) {
            self.status = match placed {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => return,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner_side(&self) -> Option<Side> {
        match self.status {
            GameStatus::XWon => Some(Side::Human),
            GameStatus::OWon => Some(Side::Computer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(Side, usize, usize)]) {
        for &(side, row, col) in moves {
            state.place_mark(side, Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_new_game_is_in_progress() {
        let state = TicTacToeGameState::new(Side::Computer);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_side, Side::Computer);
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = TicTacToeGameState::new(Side::Human);
        state.place_mark(Side::Human, Position::new(1, 1)).unwrap();
        assert_eq!(state.board.get(Position::new(1, 1)), Mark::X);
        assert_eq!(state.current_side, Side::Computer);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
        assert_eq!(state.move_count, 1);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut state = TicTacToeGameState::new(Side::Human);
        state.place_mark(Side::Human, Position::new(0, 0)).unwrap();

        assert_eq!(
            state.place_mark(Side::Human, Position::new(0, 1)),
            Err(MoveError::NotYourTurn)
        );
        assert_eq!(
            state.place_mark(Side::Computer, Position::new(0, 0)),
            Err(MoveError::Occupied)
        );
        assert_eq!(
            state.place_mark(Side::Computer, Position::new(3, 1)),
            Err(MoveError::OutOfBounds)
        );
        assert_eq!(state.move_count, 1);
        assert_eq!(state.current_side, Side::Computer);
    }

    #[test]
    fn test_human_row_wins() {
        let mut state = TicTacToeGameState::new(Side::Human);
        play(
            &mut state,
            &[
                (Side::Human, 0, 0),
                (Side::Computer, 1, 0),
                (Side::Human, 0, 1),
                (Side::Computer, 1, 1),
                (Side::Human, 0, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner_side(), Some(Side::Human));
        assert_eq!(state.current_side, Side::Human);
        assert_eq!(
            state.place_mark(Side::Computer, Position::new(2, 2)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new(Side::Human);
        play(
            &mut state,
            &[
                (Side::Human, 0, 0),
                (Side::Computer, 0, 1),
                (Side::Human, 0, 2),
                (Side::Computer, 1, 1),
                (Side::Human, 1, 0),
                (Side::Computer, 1, 2),
                (Side::Human, 2, 1),
                (Side::Computer, 2, 0),
                (Side::Human, 2, 2),
            ],
        );
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner_side(), None);
    }

    #[test]
    fn test_winning_last_move_on_full_board_is_a_win() {
        let mut state = TicTacToeGameState::new(Side::Human);
        play(
            &mut state,
            &[
                (Side::Human, 0, 0),
                (Side::Computer, 0, 1),
                (Side::Human, 0, 2),
                (Side::Computer, 1, 0),
                (Side::Human, 1, 1),
                (Side::Computer, 1, 2),
                (Side::Human, 2, 1),
                (Side::Computer, 2, 0),
                (Side::Human, 2, 2),
            ],
        );
        assert!(state.board.is_full());
        assert_eq!(state.status, GameStatus::XWon);
    }
}
