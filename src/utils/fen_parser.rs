//! FEN-to-GameState parser.
//!
//! Reads the board layout and side-to-move fields. Castling rights, the
//! en-passant target and the clocks have no effect on this engine; when
//! present they are accepted without validation and ignored.

use log::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(ChessErrors::MissingFenField("board layout"))?;
    let side_part = parts.next().ok_or(ChessErrors::MissingFenField("side to move"))?;

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    let ignored = parts.count();
    debug!("parsed position '{fen}' ({ignored} trailing fields ignored)");

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenRankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        // First FEN rank is rank 8, stored in row 7.
        let row = 7 - fen_rank_idx as u8;
        let mut files = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                files += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if files < 8 {
                game_state.set_piece(Coord::new(row, files as u8), Some(piece));
            }
            files += 1;
        }

        if files != 8 {
            return Err(ChessErrors::InvalidFenRankWidth((row + 1, files)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidSideToMove(side_part.to_owned())),
    }
}
