use std::io::{self, BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    FirstPlayerMode, GameStatus, MoveError, Position, Side, TicTacToeGameState,
    calculate_computer_move,
};
use tictactoe_common::log;

use super::input::InputReader;
use super::render::print_board;

/// Plays one game to completion and returns its final status.
///
/// An invalid human move is reported and re-prompted without passing the
/// turn. Running out of input is an `UnexpectedEof` error.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut InputReader<R>,
    out: &mut W,
    rng: &mut SessionRng,
    first_player: FirstPlayerMode,
) -> io::Result<GameStatus> {
    let first_side = first_player.resolve(rng);
    log!("New game, seed {}, {:?} moves first", rng.seed(), first_side);

    match first_side {
        Side::Human => writeln!(out, "Player goes first as 'X'.")?,
        Side::Computer => writeln!(out, "Computer goes first as 'O'.")?,
    }

    let mut state = TicTacToeGameState::new(first_side);
    print_board(out, &state.board)?;

    while !state.status.is_over() {
        match state.current_side {
            Side::Human => human_turn(input, out, &mut state)?,
            Side::Computer => computer_turn(out, &mut state)?,
        }
    }

    if let Some(message) = outcome_message(state.status) {
        writeln!(out, "{}", message)?;
    }
    log!("Game over after {} moves: {:?}", state.move_count, state.status);

    Ok(state.status)
}

pub fn outcome_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::XWon => Some("Congratulations! You win!"),
        GameStatus::OWon => Some("Computer wins! Better luck next time."),
        GameStatus::Draw => Some("It's a draw!"),
        GameStatus::InProgress => None,
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut InputReader<R>,
    out: &mut W,
    label: &str,
) -> io::Result<Option<i64>> {
    write!(out, "{}", label)?;
    out.flush()?;
    input.next_int()
}

fn human_turn<R: BufRead, W: Write>(
    input: &mut InputReader<R>,
    out: &mut W,
    state: &mut TicTacToeGameState,
) -> io::Result<()> {
    writeln!(out, "Your turn (Player X):")?;
    let row = prompt(input, out, "Enter row (1-3): ")?;
    let col = prompt(input, out, "Enter column (1-3): ")?;

    let placed = match row
        .zip(col)
        .and_then(|(row, col)| Position::from_one_based(row, col))
    {
        Some(pos) => state.place_mark(Side::Human, pos),
        None => Err(MoveError::OutOfBounds),
    };

    match placed {
        Ok(()) => print_board(out, &state.board),
        Err(err) => {
            log!("Rejected move {:?}/{:?}: {}", row, col, err);
            writeln!(out, "Invalid move. Try again.")
        }
    }
}

fn computer_turn<W: Write>(out: &mut W, state: &mut TicTacToeGameState) -> io::Result<()> {
    let pos = calculate_computer_move(&state.board)
        .ok_or_else(|| io::Error::other("no move available on a finished board"))?;
    state
        .place_mark(Side::Computer, pos)
        .map_err(io::Error::other)?;

    let (row, col) = pos.to_one_based();
    writeln!(
        out,
        "Computer places '{}' at row {} and column {}",
        Side::Computer.mark().symbol(),
        row,
        col
    )?;
    print_board(out, &state.board)
}
