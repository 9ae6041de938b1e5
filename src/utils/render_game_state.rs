//! Terminal-oriented ASCII board renderer.
//!
//! Creates a human-readable board view for the console game, tests and
//! diagnostics. Pieces use their FEN letters (uppercase White, lowercase
//! Black); empty squares are `.`.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board with rank 8 at the top and file labels on both edges.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match game_state.piece_at(Coord::new(row, col)) {
                Some(piece) => out.push(piece.fen_char()),
                None => out.push('.'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
