use crate::game_state::{chess_types::*, game_state::GameState};

/// Serialize a position. Castling, en-passant and clocks are not tracked,
/// so those fields are always written as `- - 0 1`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!("{board} {side_to_move} - - 0 1")
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..BOARD_SIZE).rev() {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            match game_state.piece_at(Coord::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}
