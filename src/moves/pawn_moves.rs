//! Pawn pushes and diagonal captures.
//!
//! Offsets are relative to the pawn's color: `Color::forward` is +1 row for
//! Light and -1 row for Dark.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Column deltas of the two capture diagonals.
pub const PAWN_CAPTURE_COLUMNS: [i8; 2] = [-1, 1];

/// Forward moves: one step onto an empty square and, from the starting row,
/// two steps when both squares are empty.
pub fn pawn_pushes(game_state: &GameState, from: Coord, color: Color, out: &mut Vec<Coord>) {
    let forward = color.forward();

    let Some(single) = from.offset(forward, 0) else {
        return;
    };
    if game_state.piece_at(single).is_some() {
        return;
    }
    out.push(single);

    if from.row != color.pawn_start_row() {
        return;
    }
    if let Some(double) = from.offset(2 * forward, 0) {
        if game_state.piece_at(double).is_none() {
            out.push(double);
        }
    }
}

/// Forward diagonals holding a piece of the other color.
pub fn pawn_captures(game_state: &GameState, from: Coord, color: Color, out: &mut Vec<Coord>) {
    for d_col in PAWN_CAPTURE_COLUMNS {
        let Some(target) = from.offset(color.forward(), d_col) else {
            continue;
        };
        if matches!(game_state.piece_at(target), Some(piece) if piece.color != color) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_step_only_from_start_row() {
        let game = GameState::new_empty();

        let mut from_start = Vec::new();
        pawn_pushes(&game, Coord::new(1, 4), Color::Light, &mut from_start);
        assert_eq!(from_start, vec![Coord::new(2, 4), Coord::new(3, 4)]);

        let mut advanced = Vec::new();
        pawn_pushes(&game, Coord::new(2, 4), Color::Light, &mut advanced);
        assert_eq!(advanced, vec![Coord::new(3, 4)]);

        let mut dark = Vec::new();
        pawn_pushes(&game, Coord::new(6, 0), Color::Dark, &mut dark);
        assert_eq!(dark, vec![Coord::new(5, 0), Coord::new(4, 0)]);
    }

    #[test]
    fn blocked_path_stops_both_steps() {
        let mut game = GameState::new_empty();
        game.set_piece(Coord::new(2, 4), Some(Piece::new(PieceKind::Knight, Color::Dark)));

        let mut out = Vec::new();
        pawn_pushes(&game, Coord::new(1, 4), Color::Light, &mut out);
        assert!(out.is_empty());

        game.set_piece(Coord::new(2, 4), None);
        game.set_piece(Coord::new(3, 4), Some(Piece::new(PieceKind::Knight, Color::Dark)));
        pawn_pushes(&game, Coord::new(1, 4), Color::Light, &mut out);
        assert_eq!(out, vec![Coord::new(2, 4)]);
    }

    #[test]
    fn captures_need_an_enemy_piece() {
        let mut game = GameState::new_empty();
        game.set_piece(Coord::new(5, 3), Some(Piece::new(PieceKind::Rook, Color::Light)));
        game.set_piece(Coord::new(5, 5), Some(Piece::new(PieceKind::Rook, Color::Dark)));

        let mut out = Vec::new();
        pawn_captures(&game, Coord::new(6, 4), Color::Dark, &mut out);
        assert_eq!(out, vec![Coord::new(5, 3)]);
    }
}
