mod board;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, TrialMove};
pub use game_state::{MoveError, TicTacToeGameState};
pub use minimax::{SearchResult, calculate_computer_move, search, side_mark};
pub use types::{FirstPlayerMode, GameStatus, Mark, Position, Side};
pub use win_detector::{WINNING_LINES, check_win, is_winner};
