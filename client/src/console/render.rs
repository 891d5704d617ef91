use std::io::{self, Write};

use tictactoe_common::games::tictactoe::Board;

const ROW_SEPARATOR: &str = "---------";

pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|mark| mark.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", ROW_SEPARATOR))
}

/// Writes the grid framed by blank lines.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", render_board(board))?;
    writeln!(out)
}
